//! Service name to base URL resolution.

use std::collections::HashMap;

use url::Url;

use crate::{
    config::HostsConfig,
    error::{Error, Result},
};

/// Service name of the money API.
pub const MONEY_API_SERVICE: &str = "money-api";

/// Public base URL of the money API.
pub const DEFAULT_MONEY_API_URL: &str = "https://yoomoney.ru/api";

/// Resolves a named service to its base URL.
pub trait HostsProvider: Send + Sync {
    /// Returns the base URL of `service`, without a trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HostResolution`] if the service is unknown.
    fn resolve_base_url(&self, service: &str) -> Result<Url>;
}

/// Table-driven [`HostsProvider`].
#[derive(Debug, Clone)]
pub struct DefaultHostsProvider {
    hosts: HashMap<String, Url>,
}

impl DefaultHostsProvider {
    /// Creates a provider knowing only the public money API host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if [`DEFAULT_MONEY_API_URL`] does not parse.
    pub fn new() -> Result<Self> {
        Self::from_config(&HostsConfig::default())
    }

    /// Creates a provider from the `[hosts]` configuration table.
    ///
    /// Services missing from `config` keep their public defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a URL does not parse.
    pub fn from_config(config: &HostsConfig) -> Result<Self> {
        let mut hosts = HashMap::new();
        hosts.insert(
            MONEY_API_SERVICE.to_owned(),
            parse_url(MONEY_API_SERVICE, DEFAULT_MONEY_API_URL)?,
        );
        for (service, url) in &config.services {
            hosts.insert(service.clone(), parse_url(service, url)?);
        }
        Ok(Self { hosts })
    }

    /// Adds or replaces the base URL of `service`.
    #[must_use]
    pub fn with_host(mut self, service: impl Into<String>, url: Url) -> Self {
        self.hosts.insert(service.into(), url);
        self
    }
}

impl HostsProvider for DefaultHostsProvider {
    fn resolve_base_url(&self, service: &str) -> Result<Url> {
        self.hosts
            .get(service)
            .cloned()
            .ok_or_else(|| Error::HostResolution(format!("unknown service '{service}'")))
    }
}

fn parse_url(service: &str, url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::Config(format!("invalid URL for service '{service}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_money_api() {
        let hosts = DefaultHostsProvider::new().unwrap();
        let url = hosts.resolve_base_url(MONEY_API_SERVICE).unwrap();
        assert_eq!(url.as_str(), DEFAULT_MONEY_API_URL);
    }

    #[test]
    fn test_unknown_service() {
        let hosts = DefaultHostsProvider::new().unwrap();
        assert!(matches!(hosts.resolve_base_url("wallet-api"), Err(Error::HostResolution(_))));
    }

    #[test]
    fn test_config_overrides_default() {
        let mut config = HostsConfig::default();
        config
            .services
            .insert(MONEY_API_SERVICE.to_owned(), "https://sandbox.example.com/api".to_owned());
        let hosts = DefaultHostsProvider::from_config(&config).unwrap();
        let url = hosts.resolve_base_url(MONEY_API_SERVICE).unwrap();
        assert_eq!(url.host_str(), Some("sandbox.example.com"));
    }

    #[test]
    fn test_new_matches_empty_config() {
        let default = DefaultHostsProvider::new().unwrap();
        let configured = DefaultHostsProvider::from_config(&HostsConfig::default()).unwrap();
        assert_eq!(default.hosts, configured.hosts);
        assert_eq!(default.hosts.len(), 1);
    }

    #[test]
    fn test_with_host() {
        let url = Url::parse("https://other.example.com").unwrap();
        let hosts = DefaultHostsProvider::new().unwrap().with_host("other", url.clone());
        assert_eq!(hosts.resolve_base_url("other").unwrap(), url);
    }
}
