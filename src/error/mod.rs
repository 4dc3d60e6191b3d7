//! Error handling
//!
//! Defines error types and handling for the auth core.

pub mod handlers;
pub mod types;

pub use types::*;
