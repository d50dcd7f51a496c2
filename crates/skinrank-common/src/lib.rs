//! skinrank-common — Shared errors and configuration used across all SkinRank crates.

pub mod error;
pub mod config;

// Re-export commonly used types
pub use config::{AppConfig, ConfigSource, LoggingConfig, ServerConfig};
pub use error::{ApiError, Result, SkinRankError};
