//! Request and response bodies for the HTTP API
//!
//! All JSON bodies use camelCase field names.

pub mod auth;
pub mod credential;
pub mod profile;

mod validators;

pub use auth::{ChangePasswordRequest, LoginRequest, ResendOtpRequest, SignupRequest, VerifyRequest};
pub use credential::{CredentialResponse, DoctorCredentialRequest, PharmacistCredentialRequest};
pub use profile::{CompleteProfileRequest, OwnProfileResponse};
