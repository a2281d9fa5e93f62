//! Settings structures for craving-lunch configuration

use crate::yelp::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub yelp: YelpSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (CRAVING_LUNCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("CRAVING_LUNCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("CRAVING_LUNCH_BASE_URL") {
            self.yelp.base_url = val;
        }
        if let Ok(val) = std::env::var("CRAVING_LUNCH_API_KEY_ENV") {
            self.yelp.api_key_env = val;
        }
    }

    /// Reject settings that cannot produce a working request
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.yelp.base_url)
            .map_err(|e| anyhow::anyhow!("Invalid yelp.base_url '{}': {}", self.yelp.base_url, e))?;
        if !matches!(base.scheme(), "http" | "https") {
            anyhow::bail!("yelp.base_url must be http or https, got '{}'", base.scheme());
        }
        if self.yelp.api_key_env.trim().is_empty() {
            anyhow::bail!("yelp.api_key_env must name an environment variable");
        }
        if let Some(timeout) = self.outgoing.request_timeout {
            if !timeout.is_finite() || timeout <= 0.0 {
                anyhow::bail!(
                    "outgoing.request_timeout must be a positive number of seconds, got {}",
                    timeout
                );
            }
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Yelp API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YelpSettings {
    /// API root; the search path is appended to it
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for YelpSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds (none = wait for the server)
    pub request_timeout: Option<f64>,
    /// Appended to the user agent
    pub useragent_suffix: Option<String>,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            useragent_suffix: None,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}
