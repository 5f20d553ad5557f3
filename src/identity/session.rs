use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::principal::Principal;
use super::provider::{AuthProvider, LoginRequest};
use crate::error::{AppError, AppResult};

/// An issued session. A `Session` existing is the authenticated state: the
/// role is carried by the principal, so "authenticated with no role" is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub principal: Principal,
    pub issued_at: DateTime<Utc>,
}

/// Sole owner of the in-memory session. Views and the router only ever see
/// read-only borrows; all transitions go through `login`/`logout`.
#[derive(Debug, Default)]
pub struct SessionController {
    current: Option<Session>,
}

impl SessionController {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Verify credentials through the provider and issue a fresh session.
    /// Any existing session is replaced outright; nothing from the previous
    /// role survives a re-login.
    pub fn login(&mut self, provider: &dyn AuthProvider, req: &LoginRequest) -> AppResult<&Session> {
        let principal = provider
            .verify(req)
            .map_err(|e| AppError::auth("invalid_credentials", e.to_string()))?;
        let sess = Session {
            session_id: Uuid::new_v4().to_string(),
            principal,
            issued_at: Utc::now(),
        };
        tracing::info!(
            user = %sess.principal.username,
            role = %sess.principal.role,
            sid = %sess.session_id,
            "session.login"
        );
        Ok(&*self.current.insert(sess))
    }

    /// Clear the session. Idempotent: signing out while signed out is a no-op.
    pub fn logout(&mut self) {
        if let Some(sess) = self.current.take() {
            tracing::info!(
                user = %sess.principal.username,
                sid = %sess.session_id,
                "session.logout"
            );
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
