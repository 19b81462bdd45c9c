/*
[INPUT]:  Optional YAML file, BITFLYER_* environment variables
[OUTPUT]: Parsed CLI configuration and configured API client
[POS]:    Configuration layer - credentials and connection settings
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use bitflyer_adapter::{BitflyerClient, ClientConfig, Credentials};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `BITFLYER_API_KEY`
pub const ENV_PREFIX: &str = "BITFLYER";

/// Settings for the command-line client
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key (public identifier)
    #[serde(default)]
    pub api_key: Option<String>,
    /// API secret used to sign private requests
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Override for the API base URL
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl CliConfig {
    /// Load from an optional YAML file, then let the process environment override it
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`CliConfig::load`] with an explicit environment map instead of the process's
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(false)
                .source(env),
        );

        builder
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")
    }

    /// Credentials if both key and secret are present
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.api_key, &self.api_secret) {
            (Some(key), Some(secret)) => Some(Credentials::new(key, secret)),
            _ => None,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    /// Build a client; private endpoints are enabled only when credentials are configured
    pub fn build_client(&self) -> Result<BitflyerClient> {
        let client =
            BitflyerClient::with_config(self.client_config()).context("create HTTP client")?;
        Ok(match self.credentials() {
            Some(credentials) => client.with_credentials(credentials),
            None => client,
        })
    }

    /// Placeholder configuration written by `init`
    pub fn template() -> Self {
        Self {
            api_key: Some("YOUR_API_KEY".to_string()),
            api_secret: Some("YOUR_API_SECRET".to_string()),
            base_url: Some(bitflyer_adapter::BASE_URL.to_string()),
            timeout_secs: Some(30),
        }
    }

    /// Save configuration as YAML
    pub fn write_yaml(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("serialize config")?;
        std::fs::write(path, yaml)
            .with_context(|| format!("write config to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_key_and_secret() {
        let only_key = CliConfig {
            api_key: Some("k".to_string()),
            ..CliConfig::default()
        };
        assert!(only_key.credentials().is_none());

        let both = CliConfig {
            api_secret: Some("s".to_string()),
            ..only_key
        };
        assert_eq!(both.credentials(), Some(Credentials::new("k", "s")));
    }

    #[test]
    fn test_client_config_overrides() {
        let config = CliConfig {
            base_url: Some("http://127.0.0.1:9999".to_string()),
            timeout_secs: Some(5),
            ..CliConfig::default()
        };
        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://127.0.0.1:9999");
        assert_eq!(client_config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", CliConfig::template());
        assert!(rendered.contains("YOUR_API_KEY"));
        assert!(!rendered.contains("YOUR_API_SECRET"));
    }
}
