//! Unified application error model.
//! A common error enum used across the console front end and the identity
//! layer, along with helper constructors and an exit-code mapping.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    UserInput { code: String, message: String },
    NotFound { code: String, message: String },
    Auth { code: String, message: String },
    Forbidden { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::UserInput { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Auth { code, .. }
            | AppError::Forbidden { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::UserInput { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Auth { message, .. }
            | AppError::Forbidden { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<C: Into<String>, M: Into<String>>(code: C, msg: M) -> Self { AppError::UserInput { code: code.into(), message: msg.into() } }
    pub fn not_found<C: Into<String>, M: Into<String>>(code: C, msg: M) -> Self { AppError::NotFound { code: code.into(), message: msg.into() } }
    pub fn auth<C: Into<String>, M: Into<String>>(code: C, msg: M) -> Self { AppError::Auth { code: code.into(), message: msg.into() } }
    pub fn forbidden<C: Into<String>, M: Into<String>>(code: C, msg: M) -> Self { AppError::Forbidden { code: code.into(), message: msg.into() } }
    pub fn internal<C: Into<String>, M: Into<String>>(code: C, msg: M) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// Map to a process exit code for fatal paths in the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UserInput { .. } => 2,
            AppError::NotFound { .. } => 3,
            AppError::Auth { .. } => 4,
            AppError::Forbidden { .. } => 5,
            AppError::Internal { .. } => 1,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal { code: "internal".into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_mapping() {
        assert_eq!(AppError::user("bad_input", "oops").exit_code(), 2);
        assert_eq!(AppError::not_found("not_found", "missing").exit_code(), 3);
        assert_eq!(AppError::auth("invalid_credentials", "no").exit_code(), 4);
        assert_eq!(AppError::forbidden("unauthorized", "blocked").exit_code(), 5);
        assert_eq!(AppError::internal("internal", "panic").exit_code(), 1);
    }

    #[test]
    fn display_includes_code_and_message() {
        let e = AppError::auth("invalid_credentials", "username and password must not be empty");
        assert_eq!(e.to_string(), "invalid_credentials: username and password must not be empty");
        assert_eq!(e.code_str(), "invalid_credentials");
    }
}
