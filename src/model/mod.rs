//! Data transfer objects shared between the API server and the web client.

pub mod api;
pub mod auth;
pub mod family;
pub mod measurement;
pub mod profile;
