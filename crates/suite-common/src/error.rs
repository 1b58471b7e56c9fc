//! Error types for OpenSuite

use thiserror::Error;

/// OpenSuite error type
///
/// Genuine faults only. Admission denials are [`crate::Decision`] values,
/// never errors.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// Tenant not found
    #[error("tenant not found: {0}")]
    TenantNotFound(crate::TenantId),

    /// User not found
    #[error("user not found: {0}")]
    UserNotFound(crate::UserId),

    /// Role instance not found
    #[error("role not found: {0}")]
    RoleNotFound(crate::RoleInstanceId),

    /// Unknown permission name
    #[error("unknown permission: {0}")]
    UnknownPermission(String),

    /// Configuration error
    #[error("config error: {0}")]
    ConfigError(String),
}

/// Result type for OpenSuite
pub type SuiteResult<T> = Result<T, SuiteError>;
