//! Shared errors and configuration for Parcel.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig, ReportsConfig, ServerConfig};
pub use error::{AppError, AppResult};
