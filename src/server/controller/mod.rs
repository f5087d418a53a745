//! HTTP controller endpoints for the web API.
//!
//! This module contains the Axum handlers for authentication, profiles,
//! children, families, and invites. Controllers translate between HTTP and
//! the service layer: they read the session, hand validated input to
//! services, and turn results into responses. They integrate with
//! tower-sessions for session management and use utoipa for OpenAPI
//! documentation.

pub mod auth;
pub mod child;
pub mod family;
pub mod invite;
pub mod me;
pub mod util;
