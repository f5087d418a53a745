//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (profiles, families, invites, children, measurements).
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so services can run them
//! against the shared connection or inside a transaction.

pub mod child;
pub mod family;
pub mod family_invite;
pub mod family_member;
pub mod measurement;
pub mod profile;
