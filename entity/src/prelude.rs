pub use super::child::Entity as Child;
pub use super::child_measurement::Entity as ChildMeasurement;
pub use super::family::Entity as Family;
pub use super::family_invite::Entity as FamilyInvite;
pub use super::family_member::Entity as FamilyMember;
pub use super::profile::Entity as Profile;
pub use super::profile_measurement::Entity as ProfileMeasurement;
