//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod patient_profile;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use patient_profile::{OwnProfile, PatientProfile};
