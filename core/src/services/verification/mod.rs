//! Verification service module for email-based account activation
//!
//! This module covers code issuance and delivery:
//! - Six-digit code generation with an expiry window
//! - Delivery through a pluggable mail transport
//! - Best-effort welcome email after activation

mod config;
mod service;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::MailServiceTrait;
