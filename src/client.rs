//! API client configuration.
//!
//! The console builds one [`ApiClient`] at startup from a [`ClientConfig`]
//! and hands it to whatever needs it. Nothing here is global. Sending the
//! requests is left to the transport layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::ConsoleError;

/// Base URL and default headers for API requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConsoleError> {
        Ok(ClientConfig {
            base_url: Url::parse(base_url)?,
            headers: BTreeMap::new(),
        })
    }

    /// Load a config from JSON, e.g. `{"base_url": "...", "headers": {...}}`.
    pub fn from_json(text: &str) -> Result<Self, ConsoleError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// An explicitly constructed handle on the console API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    headers: BTreeMap<String, String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConsoleError> {
        let ClientConfig {
            mut base_url,
            headers,
        } = config;

        if base_url.cannot_be_a_base() {
            return Err(ConsoleError::InvalidUrl(format!(
                "'{base_url}' cannot be used as a base url"
            )));
        }
        // join() replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        debug!(
            event = "Client",
            phase = "Configured",
            base_url = base_url.as_str(),
            headers = headers.len()
        );

        Ok(ApiClient {
            base: base_url,
            headers,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve `path` under the base URL. Leading slashes are ignored so
    /// the base path is always kept; absolute URLs are rejected.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConsoleError> {
        let relative = path.trim_start_matches('/');
        if Url::parse(relative).is_ok() {
            return Err(ConsoleError::InvalidUrl(format!(
                "'{path}' is absolute, expected a path under '{}'",
                self.base
            )));
        }
        Ok(self.base.join(relative)?)
    }

    /// Default headers, sorted by name.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        no_trailing_slash = { "https://api.example.com/api", "v1/users", "https://api.example.com/api/v1/users" },
        trailing_slash = { "https://api.example.com/api/", "v1/users", "https://api.example.com/api/v1/users" },
        leading_slash_kept_under_base = { "https://api.example.com/api", "/v1/users", "https://api.example.com/api/v1/users" },
        root_base = { "https://api.example.com", "groups", "https://api.example.com/groups" },
        query = { "https://api.example.com/api", "users?role=admin", "https://api.example.com/api/users?role=admin" },
    )]
    fn test_endpoint(base: &str, path: &str, expected: &str) {
        let client = ApiClient::new(ClientConfig::new(base).unwrap()).unwrap();
        assert_eq!(client.endpoint(path).unwrap().as_str(), expected);
    }

    #[parameterized(
        other_host = { "https://other.host/x" },
        other_scheme = { "ftp://api.example.com/api/v1" },
        leading_slash_absolute = { "/https://other.host/x" },
    )]
    fn test_endpoint_rejects_absolute_url(path: &str) {
        let client = ApiClient::new(ClientConfig::new("https://api.example.com/api").unwrap()).unwrap();
        assert!(matches!(
            client.endpoint(path),
            Err(ConsoleError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_scheme_relative_path_keeps_host() {
        let client = ApiClient::new(ClientConfig::new("https://api.example.com/api").unwrap()).unwrap();
        let url = client.endpoint("//other.host/x").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/other.host/x");
    }

    #[test]
    fn test_config_rejects_relative_url() {
        assert!(matches!(
            ClientConfig::new("/api"),
            Err(ConsoleError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_client_rejects_non_base_url() {
        let config = ClientConfig::new("mailto:ops@example.com").unwrap();
        assert!(matches!(
            ApiClient::new(config),
            Err(ConsoleError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config = ClientConfig::from_json(
            r#"{"base_url": "https://api.example.com/", "headers": {"X-Tenant": "acme"}}"#,
        )
        .unwrap();
        let client = ApiClient::new(config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.example.com/");
        assert_eq!(client.headers().collect::<Vec<_>>(), vec![("X-Tenant", "acme")]);
    }

    #[test]
    fn test_config_from_json_rejects_bad_url() {
        assert!(matches!(
            ClientConfig::from_json(r#"{"base_url": "not a url"}"#),
            Err(ConsoleError::Deserialize(_))
        ));
    }

    #[test]
    fn test_headers_sorted_by_name() {
        let config = ClientConfig::new("https://api.example.com")
            .unwrap()
            .with_header("X-Tenant", "acme")
            .with_header("Accept", "application/json");
        let client = ApiClient::new(config).unwrap();
        let names: Vec<&str> = client.headers().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["Accept", "X-Tenant"]);
    }
}
