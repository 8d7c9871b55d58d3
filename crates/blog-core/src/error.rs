//! Error types for the blog core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Site configuration is invalid.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A preference storage backend could not be read or written.
    #[error("Storage error for key {key}: {message}")]
    Storage { key: String, message: String },
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new storage error.
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_storage_error() {
        let err = CoreError::storage("theme", "quota exceeded");
        assert!(err.to_string().contains("Storage error"));
        assert!(err.to_string().contains("theme"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err: CoreError = toml_err.into();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
