//! Server application core modules.
//!
//! This module contains all server-side functionality for the SizeVault application,
//! including HTTP routing, session-backed authentication against the external identity
//! provider, database operations for profiles, families, invites, children, and
//! measurements, and access policy checks for row-level authorization.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod identity;
pub mod model;
pub mod policy;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
