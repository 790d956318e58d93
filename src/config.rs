use std::env;
use std::time::Duration;

use crate::session::DEFAULT_MAX_OFFSET;

/// TCP connection establishment timeout for every API call.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WIKIQUERY_MAX_OFFSET must be a positive integer, got '{0}'")]
    InvalidMaxOffset(String),
}

/// Runtime settings.
///
/// Environment overrides:
/// - `WIKIQUERY_LANG`: locale used instead of the system one (e.g. `de` or `de_DE.UTF-8`)
/// - `WIKIQUERY_MAX_OFFSET`: stop paginating once this result offset is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub locale: Option<String>,
    pub max_offset: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            max_offset: DEFAULT_MAX_OFFSET,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let locale = lookup("WIKIQUERY_LANG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(crate::wiki::locale::system_locale);

        let max_offset = match lookup("WIKIQUERY_MAX_OFFSET") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidMaxOffset(raw))?,
            None => DEFAULT_MAX_OFFSET,
        };

        Ok(Self { locale, max_offset })
    }
}
