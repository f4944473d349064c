// Settings module
// Application configuration as read from config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::models::view::{DateFilter, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the events API, without the `/events` suffix
    pub api_base_url: String,
    pub refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub default_date_filter: DateFilter,
    pub default_sort: SortKey,
    /// Overrides where the session token file is looked up
    pub access_token_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            refresh_interval_secs: 300,
            request_timeout_secs: 20,
            default_date_filter: DateFilter::All,
            default_sort: SortKey::DateAsc,
            access_token_path: None,
        }
    }
}

impl AppConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err("api_base_url is not configured".to_string());
        }

        let url = reqwest::Url::parse(base)
            .map_err(|err| format!("api_base_url '{}' is not a valid URL: {}", base, err))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "api_base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.refresh_interval_secs == 0 {
            return Err("refresh_interval_secs must be greater than zero".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }

        Ok(())
    }
}
