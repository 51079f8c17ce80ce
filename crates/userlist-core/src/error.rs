//! Shared error type across userlist crates.

use thiserror::Error;

/// Stable error codes, used in logs and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config file is malformed or fails validation.
    InvalidConfig,
    /// Config declares a schema version we don't understand.
    UnsupportedVersion,
    /// Filesystem or socket failure.
    Io,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, UserListError>;

/// Unified error type used by core and server.
///
/// Only startup paths produce these; serving `/users` cannot fail.
#[derive(Debug, Error)]
pub enum UserListError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
}

impl UserListError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UserListError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            UserListError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            UserListError::Io(_) => ErrorCode::Io,
        }
    }
}
