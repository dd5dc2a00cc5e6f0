use serde::{Deserialize, Serialize};

use crate::{
    error::{WpError, WpResult},
    snapshot::LoadOptions,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WpConfig {
    pub primary_source: String,
    pub fallback_source: String,
    pub alerts_source: String,
    pub http_timeout_secs: u64,
    pub http_max_retries: u32,
}

impl Default for WpConfig {
    fn default() -> Self {
        Self {
            primary_source: "data/weekly_etfs.json".to_string(),
            fallback_source: "data/items.json".to_string(),
            alerts_source: "data/alerts.json".to_string(),
            http_timeout_secs: 30,
            http_max_retries: 3,
        }
    }
}

impl WpConfig {
    pub fn load() -> WpResult<Self> {
        confy::load(env!("CARGO_PKG_NAME"), None).map_err(Into::into)
    }

    pub fn store(&self) -> WpResult<()> {
        confy::store(env!("CARGO_PKG_NAME"), None, self).map_err(Into::into)
    }

    pub fn set(&mut self, key: &str, value: &str) -> WpResult<()> {
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "primary_source" => self.primary_source = value.to_string(),
            "fallback_source" => self.fallback_source = value.to_string(),
            "alerts_source" => self.alerts_source = value.to_string(),
            "http_timeout_secs" => self.http_timeout_secs = parse_number(key, value)?,
            "http_max_retries" => self.http_max_retries = parse_number(key, value)?,
            _ => {
                return Err(WpError::Invalid {
                    code: "UNKNOWN_CONFIG_KEY",
                    message: format!("Unknown config key '{key}'"),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("primary_source", self.primary_source.clone()),
            ("fallback_source", self.fallback_source.clone()),
            ("alerts_source", self.alerts_source.clone()),
            ("http_timeout_secs", self.http_timeout_secs.to_string()),
            ("http_max_retries", self.http_max_retries.to_string()),
        ]
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            timeout_secs: self.http_timeout_secs,
            max_retries: self.http_max_retries,
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> WpResult<T> {
    value.parse::<T>().map_err(|_| WpError::Invalid {
        code: "INVALID_CONFIG_VALUE",
        message: format!("Invalid value '{value}' for config key '{key}'"),
    })
}
