//! # HealthLink Core
//!
//! Core business logic and domain layer for the HealthLink backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Account, Claims, Credential, DoctorCredential, HealthId, PharmacistCredential, ProfileDetails,
    Role, VerificationCode,
};
pub use domain::value_objects::{AuthResponse, OwnProfile, PatientProfile};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    AccountRepository, CredentialRepository, MockAccountRepository, MockCredentialRepository,
    MockSequenceRepository, SequenceRepository,
};
pub use services::{
    AccessPolicy, AuthService, CredentialService, DoctorRegistration, HealthIdAllocator, Identity,
    MailServiceTrait, MockPasswordHasher, PasswordHasherTrait, PharmacistRegistration,
    ProfileService, SignupCommand, SignupOutcome, TokenService, TokenServiceConfig,
    VerificationService, VerificationServiceConfig,
};
