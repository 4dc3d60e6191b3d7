//! Authentication system
//!
//! Password policy, credential checks against the user directory, and the
//! seed users the directory starts from.

pub mod credentials;
pub mod forms;
pub mod policy;
pub mod results;
pub mod validator;

pub use forms::{LoginForm, ResetPasswordForm};
pub use policy::{validate_password, validate_reset_form};
pub use results::PasswordValidation;
pub use validator::{validate_credentials, validate_username};
