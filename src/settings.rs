//! # Settings
//!
//! The dashboard is configured with a single TOML file.
//!
//! ## Example
//!
//! ```toml
//! hash = "4f9079566be6b376107cd07ed8f5592c"
//! fuel_sensor_label = "Tanque de 35.000 L"
//! ```

use std::fs;
use std::path::Path;

use crate::prelude::*;

/// Represents a root settings object.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Navixy API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Navixy session key. May be passed with `--hash` instead.
    #[serde(default)]
    pub hash: Option<String>,

    /// Label of the tracker input which reports the fuel level.
    pub fuel_sensor_label: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.navixy.com/v2".into()
}

/// Defaults to one minute.
const fn default_timeout_secs() -> u64 {
    60
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the credential, preferring the command-line one.
    pub fn hash(&self, overridden: Option<&str>) -> Result<String> {
        overridden
            .or(self.hash.as_deref())
            .filter(|hash| !hash.is_empty())
            .map(String::from)
            .ok_or_else(|| anyhow!("Navixy session key is missing, set `hash` in the settings or pass `--hash`"))
    }
}

/// Read the settings file.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse(contents: &str) -> Result<Settings> {
    Ok(toml::from_str(contents)?)
}
