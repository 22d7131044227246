use thiserror::Error;

/// Faults raised while applying page events.
///
/// Validation failures are never reported through this type; they are plain
/// [`ValidationError`](crate::functional::validation_rules::ValidationError)
/// values carried in the page state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no tab with id `{0}`")]
    UnknownTab(String),
    #[error("no FAQ panel with id `{0}`")]
    UnknownFaq(String),
    #[error("page runtime is no longer running")]
    Closed,
}

/// Errors produced while loading [`PageConfig`](crate::config::PageConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenv::Error),
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
