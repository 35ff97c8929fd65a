//! Client configuration loaded from TOML.
//!
//! ```toml
//! [hosts]
//! money-api = "https://yoomoney.ru/api"
//!
//! [http]
//! timeout_secs = 30
//! connect_timeout_secs = 10
//! ```

use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;
use url::Url;

use crate::{
    error::{Error, Result},
    transport::HttpConfig,
};

/// Root client configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URLs.
    #[serde(default)]
    pub hosts: HostsConfig,

    /// HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

impl ClientConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML is malformed or fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use money_api_client::config::ClientConfig;
    ///
    /// let config = ClientConfig::from_toml(r#"
    ///     [hosts]
    ///     money-api = "https://sandbox.example.com/api"
    /// "#)?;
    /// assert_eq!(config.http.timeout_secs, 30);
    ///
    /// assert!(ClientConfig::from_toml("[http]\ntimeout_secs = 0").is_err());
    /// # Ok::<(), money_api_client::error::Error>(())
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| Error::Config(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!("cannot read config file {}: {e}", path.as_ref().display()))
        })?;
        Self::from_toml(&content)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.hosts.validate()?;
        self.http.validate()
    }
}

/// Base URLs by service name, from the `[hosts]` table.
///
/// Services not listed here keep their public defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HostsConfig {
    /// Service name to base URL.
    pub services: BTreeMap<String, String>,
}

impl HostsConfig {
    /// Validates every base URL.
    ///
    /// Each URL must parse, use HTTPS, have a host and not end with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first offending service.
    pub fn validate(&self) -> Result<()> {
        for (service, url) in &self.services {
            validate_base_url(service, url)?;
        }
        Ok(())
    }
}

fn validate_base_url(service: &str, url: &str) -> Result<()> {
    if url.ends_with('/') {
        return Err(Error::Config(format!("base URL of '{service}' must not end with '/': {url}")));
    }
    let parsed = Url::parse(url)
        .map_err(|e| Error::Config(format!("invalid base URL of '{service}' '{url}': {e}")))?;
    if parsed.scheme() != "https" {
        return Err(Error::Config(format!(
            "base URL of '{service}' must use HTTPS, got: {}",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(Error::Config(format!("base URL of '{service}' has no host: {url}")));
    }
    Ok(())
}
