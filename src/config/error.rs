//! Configuration error types.

use std::fmt;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse environment variable.
    Parse {
        key: String,
        value: String,
        error: String,
    },
    /// Invalid value for environment variable.
    Invalid { key: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { key, value, error } => {
                write!(f, "failed to parse {}='{}': {}", key, value, error)
            }
            ConfigError::Invalid { key, message } => {
                write!(f, "invalid value for {}: {}", key, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::Parse {
            key: "GRPC_CONNECT_TIMEOUT".into(),
            value: "soon".into(),
            error: "invalid duration: soon".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse GRPC_CONNECT_TIMEOUT='soon': invalid duration: soon"
        );

        let err = ConfigError::Invalid {
            key: "GRPC_HOST".into(),
            message: "must not be empty".into(),
        };
        assert_eq!(err.to_string(), "invalid value for GRPC_HOST: must not be empty");
    }
}
