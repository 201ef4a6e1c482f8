//! Configuration constants and profile loading for pokeline
//!
//! Settings come from an INI profile file, one section per profile name:
//!
//! ```ini
//! [default]
//! base_url = https://pokeapi.co/api/v2
//! page_size = 20
//! page_increment = 100
//! timeout_secs = 10
//! detail_concurrency = 8
//! ```
//!
//! A missing file or section falls back to the built-in defaults. Command
//! line flags are applied on top of whatever the profile provides.

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default profile file path for pokeline
pub const DEFAULT_PROFILE_PATH: &str = "~/.pokeline/profile";

/// Points pokeline at a different profile file
pub const PROFILE_PATH_ENV_VAR: &str = "POKELINE_PROFILE_PATH";

/// Environment variable holding the log filter (e.g. `debug`, `pokeline=trace`)
pub const LOG_LEVEL_ENV_VAR: &str = "POKELINE_LOG_LEVEL";

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const PAGE_SIZE_INCREMENT: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 8;

/// `POKELINE_PROFILE_PATH` if set, otherwise the default under the home directory
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Effective application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: usize,
    pub page_increment: usize,
    pub request_timeout: Duration,
    pub detail_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_increment: PAGE_SIZE_INCREMENT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }
}

impl AppConfig {
    /// Load `profile_name` from the INI file at `profile_path` (tilde expanded)
    pub fn load(profile_path: &str, profile_name: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(profile_path).into_owned();
        let path = Path::new(&expanded);

        if !path.exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", expanded);
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read profile file '{expanded}'"))?;
        Self::from_ini(&ini, profile_name)
    }

    /// Read a profile section from an already parsed INI document
    pub fn from_ini(ini: &Ini, profile_name: &str) -> Result<Self> {
        let mut config = Self::default();
        let Some(section) = ini.section(Some(profile_name)) else {
            tracing::debug!("Profile '{}' not found, using defaults", profile_name);
            return Ok(config);
        };

        if let Some(base_url) = section.get("base_url") {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(value) = section.get("page_size") {
            config.page_size = parse_positive(value, "page_size")?;
        }
        if let Some(value) = section.get("page_increment") {
            config.page_increment = parse_positive(value, "page_increment")?;
        }
        if let Some(value) = section.get("timeout_secs") {
            config.request_timeout = Duration::from_secs(parse_positive(value, "timeout_secs")?);
        }
        if let Some(value) = section.get("detail_concurrency") {
            config.detail_concurrency = parse_positive(value, "detail_concurrency")?;
        }

        tracing::debug!("Profile '{}' loaded: {:?}", profile_name, config);
        Ok(config)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, base_url: Option<&str>, page_size: Option<usize>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url.to_string();
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size.max(1);
        }
        self
    }
}

fn parse_positive<T>(value: &str, key: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed: T = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value '{value}' for '{key}'"))?;
    if parsed <= T::default() {
        anyhow::bail!("'{key}' must be greater than zero");
    }
    Ok(parsed)
}
