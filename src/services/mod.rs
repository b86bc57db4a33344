//! Business logic services.
//!
//! Services hold the logic between HTTP handlers and the database:
//! validation, caller scoping and report generation.

pub mod record_service;
pub mod report_service;
pub mod user_service;
