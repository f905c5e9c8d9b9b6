//! Build Configuration
//!
//! Values baked in at compile time. The browser has no process
//! environment, so `ADMIN_API_URL` and `ADMIN_LOG_LEVEL` are read from the
//! build environment (e.g. `ADMIN_API_URL=https://api.example trunk build`).

use log::LevelFilter;

/// Backend address used when `ADMIN_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Read the base URL from the build environment
    pub fn from_env() -> Self {
        Self::from_value(option_env!("ADMIN_API_URL"))
    }

    /// Blank values fall back to the default; a trailing `/` is dropped
    pub fn from_value(value: Option<&str>) -> Self {
        let base = value
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute API path (starting with `/`) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}

/// Console log level from `ADMIN_LOG_LEVEL`, `info` by default
pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("ADMIN_LOG_LEVEL"))
}

/// Unset, blank or unknown names fall back to `info`
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}
