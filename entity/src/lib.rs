pub mod prelude;

pub mod child;
pub mod child_measurement;
pub mod family;
pub mod family_invite;
pub mod family_member;
pub mod profile;
pub mod profile_measurement;
