//! Shared utilities and common functionality
//!
//! This module contains the error types and logging helpers used across
//! the crate.

pub mod error;
pub mod logging;

pub use error::{AppError, AppResult, RuleError, RuleResult};
pub use logging::LoggingUtils;
