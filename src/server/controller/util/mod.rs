//! Utility functions for controller request handling.
//!
//! This module provides reusable helper functions used across controllers,
//! currently session-to-profile resolution for protected endpoints.

pub mod get_profile;
