//! Email + password authentication: signup policy, password hashing and the
//! session helpers shared by every server function.

mod policy;
pub use policy::{normalize_email, validate_signup};

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password, PasswordError};
#[cfg(feature = "server")]
pub use session::{require_user_id, session_user_id, start_session};
