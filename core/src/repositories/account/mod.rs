#[path = "trait.rs"]
mod trait_;
mod mock;


pub use mock::MockAccountRepository;
pub use trait_::AccountRepository;
