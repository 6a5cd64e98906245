use crate::error::{PubProxyError, Result};
use crate::options::{ApiKey, QueryOptions};
use serde::Deserialize;
use std::env;
use std::fs;
use std::time::Duration;
use url::Url;

/// Base URL of the pubproxy API.
pub const ENDPOINT: &str = "http://pubproxy.com/api/proxy";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub endpoint: String,
    /// Deadline for the API request; none by default.
    pub timeout_secs: Option<u64>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` for the API request itself.
    pub system_proxy: bool,
    /// Filters sent with every resolution; `None` means [`QueryOptions::default`].
    pub options: Option<QueryOptions>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            timeout_secs: None,
            system_proxy: true,
            options: None,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = ResolverConfig::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, environment variables take precedence
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PubProxyError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;

        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| PubProxyError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(endpoint) = env::var("PUBPROXY_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Ok(timeout) = env::var("PUBPROXY_TIMEOUT_SECS") {
            let secs = timeout.parse::<u64>().map_err(|e| {
                PubProxyError::ConfigError(format!("Invalid PUBPROXY_TIMEOUT_SECS value: {}", e))
            })?;
            self.timeout_secs = Some(secs);
        }

        if let Ok(system_proxy) = env::var("PUBPROXY_SYSTEM_PROXY") {
            self.system_proxy = system_proxy.parse::<bool>().map_err(|e| {
                PubProxyError::ConfigError(format!("Invalid PUBPROXY_SYSTEM_PROXY value: {}", e))
            })?;
        }

        if let Ok(api_key) = env::var("PUBPROXY_API_KEY") {
            self.options
                .get_or_insert_with(QueryOptions::default)
                .api = ApiKey::from(api_key);
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(PubProxyError::ConfigError("Endpoint is empty".to_string()));
        }

        Url::parse(&self.endpoint)
            .map_err(|e| PubProxyError::ConfigError(format!("Invalid endpoint: {}", e)))?;

        if self.timeout_secs == Some(0) {
            return Err(PubProxyError::ConfigError(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn query_options(&self) -> QueryOptions {
        self.options.clone().unwrap_or_default()
    }
}
