//! Logging configuration.

use super::parse::{env_opt, env_or};
use super::ConfigError;

/// Default filter: the transcript goes to stdout, logs stay quiet.
const DEFAULT_FILTER: &str = "tokio_php_client=warn";

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable tracing output.
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Output format (LOG_FORMAT).
    pub format: LogFormat,
    /// Service name for structured logging.
    pub service_name: String,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// Priority: LOG_LEVEL > RUST_LOG > default
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: tokio_php_client=debug,h2=warn
    pub fn from_env() -> Result<Self, ConfigError> {
        let format = match env_opt("LOG_FORMAT").map(|v| v.to_lowercase()).as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT".into(),
                    message: format!("expected 'text' or 'json', got '{}'", other),
                })
            }
        };

        Ok(Self {
            filter: Self::resolve_log_filter(),
            format,
            service_name: env_or("SERVICE_NAME", "tokio_php_client"),
        })
    }

    /// Resolve log filter from environment.
    ///
    /// Priority: LOG_LEVEL > RUST_LOG > default (warn)
    fn resolve_log_filter() -> String {
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("tokio_php_client={}", level);
                }
                _ => {
                    // Logging is not up yet
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        if let Ok(filter) = std::env::var("RUST_LOG") {
            return filter;
        }

        DEFAULT_FILTER.to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Text,
            service_name: "tokio_php_client".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_log_level_priority() {
        env::remove_var("LOG_LEVEL");
        env::remove_var("RUST_LOG");

        assert_eq!(
            LoggingConfig::resolve_log_filter(),
            "tokio_php_client=warn"
        );

        env::set_var("RUST_LOG", "tokio_php_client=info,h2=debug");
        assert_eq!(
            LoggingConfig::resolve_log_filter(),
            "tokio_php_client=info,h2=debug"
        );

        // LOG_LEVEL takes priority over RUST_LOG
        env::set_var("LOG_LEVEL", "debug");
        assert_eq!(
            LoggingConfig::resolve_log_filter(),
            "tokio_php_client=debug"
        );

        env::remove_var("LOG_LEVEL");
        env::remove_var("RUST_LOG");
    }

    #[test]
    fn test_log_format() {
        env::remove_var("LOG_FORMAT");
        assert_eq!(LoggingConfig::from_env().unwrap().format, LogFormat::Text);

        env::set_var("LOG_FORMAT", "JSON");
        assert_eq!(LoggingConfig::from_env().unwrap().format, LogFormat::Json);

        env::set_var("LOG_FORMAT", "xml");
        assert!(LoggingConfig::from_env().is_err());

        env::remove_var("LOG_FORMAT");
    }
}
