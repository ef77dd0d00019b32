//! Common building blocks shared by the site crates.
//!
//! This crate provides:
//! - Settings assembled from environment variables
//! - Environment variable names and allowed values
//! - Unified error handling for HTTP responses

pub mod config;
pub mod constants;
pub mod error;

pub use config::{ConfigError, Environment, Settings};
pub use error::{AppError, AppResult, ErrorReport};
