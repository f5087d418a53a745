//! Service layer for business logic and orchestration.
//!
//! Services own the application rules: input validation, transaction
//! boundaries, and assembling DTOs from repository rows. Controllers stay
//! thin and only translate between HTTP/session concerns and these calls.

pub mod auth;
pub mod child;
pub mod family;
pub mod invite;
pub mod measurement;
pub mod profile;
