//! Token service module for JWT management
//!
//! Issues HS256 bearer tokens carrying account identity and role, and
//! validates signature, issuer, audience and expiry on protected requests.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
