//! Central identity and session management for the console.
//! Keep the public surface thin and split implementation across sub-modules.

mod principal;
mod provider;
mod session;

pub use principal::{Principal, Role};
pub use provider::{AuthProvider, DemoAuthProvider, LoginError, LoginRequest};
pub use session::{Session, SessionController};
