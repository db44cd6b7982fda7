//! Repository interfaces and in-memory implementations.

pub mod account;
pub mod credential;
pub mod sequence;

pub use account::{AccountRepository, MockAccountRepository};
pub use credential::{CredentialRepository, MockCredentialRepository};
pub use sequence::{MockSequenceRepository, SequenceRepository};
