//! Utility module — errors, logging, time conversions

pub mod error;
pub mod logger;
pub mod time;

pub use error::{AppError, AppResult, ErrorBody};
