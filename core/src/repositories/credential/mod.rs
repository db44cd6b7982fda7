#[path = "trait.rs"]
mod trait_;
mod mock;

pub use mock::MockCredentialRepository;
pub use trait_::CredentialRepository;
