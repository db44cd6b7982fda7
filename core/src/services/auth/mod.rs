//! Authentication service module
//!
//! This module provides the account lifecycle:
//! - Signup with idempotent re-signup of unverified accounts
//! - Email code verification and resend
//! - Login and password change

mod hasher;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use hasher::{MockPasswordHasher, PasswordHasherTrait};
pub use service::{AuthService, MIN_PASSWORD_LENGTH};
pub use types::{SignupCommand, SignupOutcome};
