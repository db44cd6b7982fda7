//! Authentication route handlers
//!
//! Signup with email verification, code resend, login and password change.
//! None of these require a bearer token.

pub mod change_password;
pub mod login;
pub mod resend_otp;
pub mod signup;
pub mod verify;

pub use change_password::change_password;
pub use login::login;
pub use resend_otp::resend_otp;
pub use signup::signup;
pub use verify::verify;
