//! Shared configuration, errors, and tracing setup for Mizan.
//!
//! This crate provides the ambient pieces used by every other crate:
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber bootstrap

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, EngineConfig, OutputConfig};
pub use error::{AppError, AppResult};
