use thiserror::Error;

use super::principal::{Principal, Role};

/// Credentials and role selection captured by the sign-in screen.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("username and password must not be empty")]
    EmptyCredentials,
}

/// Seam to an external credential verification service. The console ships
/// only the demo provider; a real deployment would verify against a user
/// directory behind this trait.
pub trait AuthProvider {
    fn verify(&self, req: &LoginRequest) -> Result<Principal, LoginError>;
}

/// Demo verifier: any non-empty username/password pair is accepted for the
/// requested role. Passwords are never inspected or stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthProvider;

impl AuthProvider for DemoAuthProvider {
    fn verify(&self, req: &LoginRequest) -> Result<Principal, LoginError> {
        if req.username.is_empty() || req.password.is_empty() {
            return Err(LoginError::EmptyCredentials);
        }
        Ok(Principal { username: req.username.clone(), role: req.role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_provider_accepts_any_non_empty_credentials() {
        let p = DemoAuthProvider;
        let req = LoginRequest { username: "sarah.user".into(), password: "anything".into(), role: Role::User };
        let principal = p.verify(&req).expect("non-empty credentials should verify");
        assert_eq!(principal.username, "sarah.user");
        assert_eq!(principal.role, Role::User);
    }

    #[test]
    fn demo_provider_rejects_empty_fields() {
        let p = DemoAuthProvider;
        let no_user = LoginRequest { username: "".into(), password: "pw".into(), role: Role::Admin };
        let no_pass = LoginRequest { username: "u".into(), password: "".into(), role: Role::Admin };
        assert_eq!(p.verify(&no_user), Err(LoginError::EmptyCredentials));
        assert_eq!(p.verify(&no_pass), Err(LoginError::EmptyCredentials));
    }
}
