//! Utility functions and helpers for server operations.
//!
//! This module provides reusable utility functions for common server tasks, currently
//! limited to invite token generation.

pub mod token;
