//! Shared utilities and common types for the HealthLink server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and the layered configuration loader
//! - Error response structures
//! - Utility functions (email validation and masking)
//! - API response envelopes

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, MailConfig, MailProvider, ServerConfig, VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, MessageResponse};
pub use utils::validation;
