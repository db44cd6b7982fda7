//! Business services containing domain logic and use cases.

pub mod auth;
pub mod authorization;
pub mod credential;
pub mod health_id;
pub mod profile;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, MockPasswordHasher, PasswordHasherTrait, SignupCommand, SignupOutcome};
pub use authorization::{AccessPolicy, Identity};
pub use credential::{CredentialService, DoctorRegistration, PharmacistRegistration};
pub use health_id::HealthIdAllocator;
pub use profile::ProfileService;
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{MailServiceTrait, VerificationService, VerificationServiceConfig};
