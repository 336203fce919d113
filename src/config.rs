use crate::blocklist::DEFAULT_SOURCE;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::time::Duration;

/// Service settings, read from the environment (and `.env` if present).
///
/// | Variable                 | Default                 |
/// |--------------------------|-------------------------|
/// | `HOST`                   | `127.0.0.1`             |
/// | `PORT`                   | `8080`                  |
/// | `BLOCKLIST_SOURCE`       | upstream raw list URL   |
/// | `BLOCKLIST_REFRESH_SECS` | `86400` (`0` disables)  |
/// | `FETCH_TIMEOUT_SECS`     | `30`                    |
/// | `LOG_FILTER`             | `info`                  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub blocklist_source: String,
    pub refresh_interval: Option<Duration>,
    pub fetch_timeout: Duration,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            blocklist_source: DEFAULT_SOURCE.to_string(),
            refresh_interval: Some(Duration::from_secs(86_400)),
            fetch_timeout: Duration::from_secs(30),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(std::env::vars().collect())
    }

    /// Builds settings from an explicit variable map, so tests do not
    /// depend on the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |name: &str| vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(v) => parse_number("PORT", v)?,
            None => defaults.port,
        };

        let refresh_interval = match get("BLOCKLIST_REFRESH_SECS") {
            Some(v) => match parse_number::<u64>("BLOCKLIST_REFRESH_SECS", v)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => defaults.refresh_interval,
        };

        let fetch_timeout = match get("FETCH_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_number("FETCH_TIMEOUT_SECS", v)?),
            None => defaults.fetch_timeout,
        };

        Ok(Self {
            host: get("HOST").map(str::to_string).unwrap_or(defaults.host),
            port,
            blocklist_source: get("BLOCKLIST_SOURCE")
                .map(str::to_string)
                .unwrap_or(defaults.blocklist_source),
            refresh_interval,
            fetch_timeout,
            log_filter: get("LOG_FILTER")
                .map(str::to_string)
                .unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
