//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Daily cash and till movements
pub mod record;
/// Sales locations
pub mod shop;
/// Users, API keys and shop profiles
pub mod user;
