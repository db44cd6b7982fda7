//! Common utility functions

pub mod validation;

pub use validation::{is_valid_email, is_verification_code, mask_email, normalize_email};
