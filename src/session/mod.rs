//! Session management
//!
//! The session gate, the context object that carries storage and the
//! resolved directory, and the login/logout/reset flows built on them.

pub mod context;
pub mod gate;
pub mod operations;
pub mod results;

pub use context::{AuthContext, AuthLimits};
pub use gate::{clear_session, current_user, is_authenticated, write_session};
pub use operations::{process_login, process_logout, process_reset};
pub use results::{LoginResult, LogoutResult, ResetOutcome};
