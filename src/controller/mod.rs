//! HTTP request handlers.
//!
//! Controllers validate access through `AuthGuard`, convert DTOs, call the
//! service layer, and wrap results in the response envelope.

pub mod admin;
pub mod auction;
pub mod auth;
pub mod wallet;
pub mod yard;
