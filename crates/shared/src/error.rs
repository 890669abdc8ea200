//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file or resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input data could not be read or parsed.
    #[error("Input error: {0}")]
    Input(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::NotFound(_) => 66,
            Self::Validation(_) | Self::Input(_) => 65,
            Self::Internal(_) => 70,
        }
    }

    /// Returns a stable error code for structured logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Input(_) => "INPUT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::Config(String::new()).exit_code(), 78);
        assert_eq!(AppError::NotFound(String::new()).exit_code(), 66);
        assert_eq!(AppError::Validation(String::new()).exit_code(), 65);
        assert_eq!(AppError::Input(String::new()).exit_code(), 65);
        assert_eq!(AppError::Internal(String::new()).exit_code(), 70);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::Input(String::new()).error_code(), "INPUT_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::NotFound("msg".into()).to_string(),
            "Not found: msg"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(AppError::Input("msg".into()).to_string(), "Input error: msg");
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: AppError = config::ConfigError::Message("bad key".into()).into();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("bad key")));
    }
}
