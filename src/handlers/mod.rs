//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Delegates to services or the database
//! 3. Returns a JSON response or an `AppError`

pub mod health;
/// Performance report endpoint
pub mod performance;
/// Transaction record endpoints
pub mod records;
/// Shop endpoints
pub mod shops;
/// User management endpoints
pub mod users;
