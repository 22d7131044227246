use serde_derive::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    Text,
    /// JSON format with structured fields: timestamp, level, target, message
    Json,
}

impl LogFormat {
    /// Parses a format name case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagekit::utils::logger::LogFormat;
    ///
    /// assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
    /// assert_eq!(LogFormat::parse("yaml"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" => Some(LogFormat::Text),
            _ => None,
        }
    }
}

/// Initializes the global tracing subscriber with an env filter and console output.
///
/// Sets up:
/// - Environment filter for log level control (`RUST_LOG`, default `info`)
/// - `fmt::layer()` console output in the requested format
/// - Log-to-tracing bridge for crates that still emit through `log`
///
/// This function is safe to call multiple times. If a global subscriber is
/// already set it returns `Ok(())` without replacing it.
///
/// # Examples
///
/// ```
/// use pagekit::utils::logger::{init_logging, LogFormat};
///
/// let _ = init_logging(LogFormat::Text);
/// ```
pub fn init_logging(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_log::LogTracer;
    use tracing_subscriber::fmt;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Initialize LogTracer bridge first (idempotent - errors are ignored)
    let _ = LogTracer::init();

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_current_span(false))
            .try_init(),
    };

    if let Err(e) = result {
        // Already initialized, typically by a test harness or the embedding application
        tracing::debug!("tracing subscriber already initialized: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!(LogFormat::parse("text"), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse(" Json "), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(""), None);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        assert!(init_logging(LogFormat::Text).is_ok());
        assert!(init_logging(LogFormat::Json).is_ok());
    }
}
