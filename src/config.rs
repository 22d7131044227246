//! Runtime configuration for the page controller.
//!
//! Values come from `PAGEKIT_*` environment variables, optionally seeded from
//! a `.env` file. Unset variables fall back to the defaults of the original
//! page: a three second reset after a successful submit, three FAQ panels and
//! the `html`, `css` and `javascript` tabs.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::utils::logger::LogFormat;

pub const RESET_DELAY_KEY: &str = "PAGEKIT_RESET_DELAY_MS";
pub const LOG_FORMAT_KEY: &str = "PAGEKIT_LOG_FORMAT";
pub const RENDER_BUFFER_KEY: &str = "PAGEKIT_RENDER_BUFFER";
pub const FAQ_IDS_KEY: &str = "PAGEKIT_FAQ_IDS";
pub const TABS_KEY: &str = "PAGEKIT_TABS";

const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(3);
const DEFAULT_RENDER_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Delay between an accepted submit and the form being cleared.
    pub reset_delay: Duration,
    pub log_format: LogFormat,
    /// Capacity of the snapshot broadcast channel, at least 1.
    pub render_buffer: usize,
    pub faq_ids: Vec<String>,
    /// Tab ids in display order; the first one starts active.
    pub tabs: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            log_format: LogFormat::Text,
            render_buffer: DEFAULT_RENDER_BUFFER,
            faq_ids: vec!["1".into(), "2".into(), "3".into()],
            tabs: vec!["html".into(), "css".into(), "javascript".into()],
        }
    }
}

impl PageConfig {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a dotenv file without modifying the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for item in dotenv::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build configuration from an arbitrary key lookup, applying defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PageConfig::default();

        if let Some(raw) = lookup(RESET_DELAY_KEY) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid(RESET_DELAY_KEY, &raw, e.to_string()))?;
            config.reset_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(LOG_FORMAT_KEY) {
            config.log_format = LogFormat::parse(&raw).ok_or_else(|| {
                ConfigError::invalid(LOG_FORMAT_KEY, &raw, "expected `text` or `json`")
            })?;
        }

        if let Some(raw) = lookup(RENDER_BUFFER_KEY) {
            let capacity = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::invalid(RENDER_BUFFER_KEY, &raw, e.to_string()))?;
            config.render_buffer = capacity.max(1);
        }

        if let Some(raw) = lookup(FAQ_IDS_KEY) {
            config.faq_ids = parse_id_list(FAQ_IDS_KEY, &raw)?;
        }

        if let Some(raw) = lookup(TABS_KEY) {
            config.tabs = parse_id_list(TABS_KEY, &raw)?;
        }

        tracing::debug!(?config, "page configuration loaded");
        Ok(config)
    }
}

fn parse_id_list(key: &'static str, raw: &str) -> Result<Vec<String>, ConfigError> {
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        return Err(ConfigError::invalid(key, raw, "expected at least one id"));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PageConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.reset_delay, Duration::from_secs(3));
    }

    #[test]
    fn reads_every_key() {
        let config = PageConfig::from_lookup(lookup_from(&[
            (RESET_DELAY_KEY, "250"),
            (LOG_FORMAT_KEY, "JSON"),
            (RENDER_BUFFER_KEY, "0"),
            (FAQ_IDS_KEY, "a, b"),
            (TABS_KEY, "one,,two"),
        ]))
        .unwrap();
        assert_eq!(config.reset_delay, Duration::from_millis(250));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.render_buffer, 1);
        assert_eq!(config.faq_ids, vec!["a", "b"]);
        assert_eq!(config.tabs, vec!["one", "two"]);
    }

    #[test]
    fn rejects_bad_values() {
        let err = PageConfig::from_lookup(lookup_from(&[(RESET_DELAY_KEY, "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: RESET_DELAY_KEY,
                ..
            }
        ));
        assert!(PageConfig::from_lookup(lookup_from(&[(LOG_FORMAT_KEY, "xml")])).is_err());
        assert!(PageConfig::from_lookup(lookup_from(&[(TABS_KEY, " , ")])).is_err());
    }

    #[test]
    fn reads_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}=1000", RESET_DELAY_KEY).unwrap();
        writeln!(file, "{}=css,html", TABS_KEY).unwrap();
        file.flush().unwrap();

        let config = PageConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.reset_delay, Duration::from_secs(1));
        assert_eq!(config.tabs, vec!["css", "html"]);
        assert_eq!(config.faq_ids, PageConfig::default().faq_ids);
    }

    #[test]
    fn missing_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PageConfig::from_env_file(dir.path().join("absent.env"));
        assert!(matches!(result, Err(ConfigError::EnvFile(_))));
    }
}
