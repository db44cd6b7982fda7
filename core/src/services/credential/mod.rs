//! Doctor and pharmacist credential registry

mod service;


pub use service::{CredentialService, DoctorRegistration, PharmacistRegistration};
