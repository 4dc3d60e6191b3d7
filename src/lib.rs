pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod session;
pub mod shell;
pub mod storage;
pub mod utils;

pub use auth::{PasswordValidation, validate_password, validate_reset_form};
pub use directory::{User, UsersData, update_user_password};
pub use session::{AuthContext, is_authenticated};
