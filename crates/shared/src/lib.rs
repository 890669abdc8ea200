//! Shared types, errors, and configuration for Govspend.
//!
//! This crate provides common types used across all other crates:
//! - Jurisdiction codes and their map names
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::Jurisdiction;
