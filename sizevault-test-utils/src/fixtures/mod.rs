//! Test fixture modules for database rows and HTTP mock creation.
//!
//! Each submodule provides fixtures for one aspect of the system:
//!
//! - `identity` - mock endpoints for the external identity provider
//! - `family` - family, membership, and invite database rows
//! - `profile` - profile, child, and measurement database rows

pub mod family;
pub mod identity;
pub mod profile;
