//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types, making it easier to work with entities
//! without importing from the generated `entity` crate directly.

/// Type alias for the profile database model.
///
/// Represents the per-account record for a signed-up account. The primary key is the
/// opaque account id issued by the identity provider, so no local id sequence exists
/// for profiles.
///
/// # Fields (from `entity::profile::Model`)
/// - `id` - Primary key, account id issued by the identity provider
/// - `email` - Account email address, mirrored from the identity provider
/// - `full_name` - Display name chosen by the account holder (nullable)
/// - `family_id` - Foreign key to the family the account belongs to (nullable)
/// - `created_at` - Timestamp when the profile was created
/// - `updated_at` - Timestamp of the last profile update
pub type ProfileModel = entity::profile::Model;

/// Type alias for the family database model.
///
/// Represents a named family group. Membership is tracked separately through
/// `FamilyMemberModel` rows.
///
/// # Fields (from `entity::family::Model`)
/// - `id` - Primary key, unique family identifier
/// - `name` - Family display name
/// - `created_at` - Timestamp when the family was created
pub type FamilyModel = entity::family::Model;

/// Type alias for the family membership database model.
///
/// Represents one account's membership in a family, including its role. Each account
/// holds at most one membership row per family.
///
/// # Fields (from `entity::family_member::Model`)
/// - `id` - Primary key, unique membership record identifier
/// - `family_id` - Foreign key to the family
/// - `profile_id` - Foreign key to the member's profile
/// - `role` - Membership role, `admin` for the founder and `member` for joiners
/// - `created_at` - Timestamp when the membership was established (join time)
pub type FamilyMemberModel = entity::family_member::Model;

/// Type alias for the family invite database model.
///
/// Represents an issued invite token for joining a family. Invites expire at a fixed
/// time after issuance and remain in the database after expiry; expiry is checked at
/// redemption time.
///
/// # Fields (from `entity::family_invite::Model`)
/// - `id` - Primary key, unique invite identifier
/// - `family_id` - Foreign key to the family the invite joins
/// - `invited_by` - Profile id of the issuing member
/// - `token` - Opaque URL-safe join token (unique)
/// - `expires_at` - Timestamp after which the token can no longer be redeemed
/// - `created_at` - Timestamp when the invite was issued
pub type FamilyInviteModel = entity::family_invite::Model;

/// Type alias for the child database model.
///
/// Represents a child record created by an account. Children are visible to the
/// creator's family but editable only by the creator.
///
/// # Fields (from `entity::child::Model`)
/// - `id` - Primary key, unique child identifier
/// - `name` - Child's display name
/// - `birthdate` - Child's date of birth
/// - `created_by` - Profile id of the account that created the record
/// - `family_id` - Family the creator belonged to at creation time (nullable)
/// - `created_at` - Timestamp when the record was created
pub type ChildModel = entity::child::Model;

/// Type alias for the profile measurements database model.
///
/// Represents the single body measurement record attached to a profile. All measurement
/// fields are optional; saving replaces the whole record.
///
/// # Fields (from `entity::profile_measurement::Model`)
/// - `id` - Primary key, database identifier
/// - `profile_id` - Foreign key to the owning profile (unique)
/// - `height_cm` / `weight_kg` / `chest_cm` / `waist_cm` / `hips_cm` / `inseam_cm` /
///   `shoe_size` - Optional numeric measurement fields
/// - `updated_at` - Timestamp of the last save
pub type ProfileMeasurementModel = entity::profile_measurement::Model;

/// Type alias for the child measurements database model.
///
/// Represents the single body measurement record attached to a child, with the same
/// field set as profile measurements.
///
/// # Fields (from `entity::child_measurement::Model`)
/// - `id` - Primary key, database identifier
/// - `child_id` - Foreign key to the owning child (unique)
/// - `height_cm` / `weight_kg` / `chest_cm` / `waist_cm` / `hips_cm` / `inseam_cm` /
///   `shoe_size` - Optional numeric measurement fields
/// - `updated_at` - Timestamp of the last save
pub type ChildMeasurementModel = entity::child_measurement::Model;
