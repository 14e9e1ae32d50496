//! Utilities - shared helpers and types
//!
//! - [`AppError`] - application error (from shared::error)
//! - logging, validation
//! - extractors with JSON rejections

pub mod extract;
pub mod logger;
pub mod result;
pub mod validation;

pub use result::AppResult;
pub use shared::error::{AppError, ErrorBody, ErrorCategory, ErrorCode};
