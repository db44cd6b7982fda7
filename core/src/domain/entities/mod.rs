//! Domain entities representing core business objects.

pub mod account;
pub mod credential;
pub mod health_id;
pub mod token;
pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::{Account, ProfileDetails, Role};
pub use credential::{Credential, DoctorCredential, PharmacistCredential};
pub use health_id::HealthId;
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
pub use verification_code::{VerificationCode, CODE_LENGTH, DEFAULT_EXPIRATION_SECONDS};
