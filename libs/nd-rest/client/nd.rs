//! reqwest-based production backend

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{Exchange, HttpBackend, RestRequest};
use crate::config::NdConfig;
use crate::container::Container;

/// HTTP backend talking to a Nexus Dashboard-style controller.
///
/// Session establishment and credential handling live outside this crate; a
/// pre-obtained session token can be attached with [`NdClient::with_token`].
pub struct NdClient {
    base_url: String,
    client: reqwest::Client,
    token: Option<String>,
}

impl NdClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::build(base_url.into(), false)
    }

    /// Build a client from loaded configuration, honoring the insecure TLS
    /// flag for lab controllers with self-signed certificates.
    pub fn from_config(config: &NdConfig) -> Self {
        Self::build(config.url.clone(), config.insecure)
    }

    fn build(base_url: String, insecure: bool) -> Self {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));
        if insecure {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().expect("Failed to build HTTP client");

        Self {
            base_url,
            client,
            token: None,
        }
    }

    /// Attach a session token sent as a bearer header on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpBackend for NdClient {
    async fn do_request(&self, request: RestRequest) -> Exchange {
        let url = format!("{}{}", self.base_url, request.path);

        let mut req = self
            .client
            .request(request.method.into(), &url)
            .header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                return Exchange {
                    body: None,
                    status: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return Exchange {
                    body: None,
                    status: Some(status),
                    error: Some(e.to_string()),
                };
            }
        };

        if bytes.is_empty() {
            return Exchange {
                body: None,
                status: Some(status),
                error: None,
            };
        }

        match Container::parse(&bytes) {
            Ok(body) => Exchange {
                body: Some(body),
                status: Some(status),
                error: None,
            },
            Err(e) => {
                debug!("Response body is not valid JSON: {}", e);
                Exchange {
                    body: None,
                    status: Some(status),
                    error: Some(format!("Failed to decode response body: {}", e)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NdClient::new("https://nd.example.com");
        assert_eq!(client.base_url(), "https://nd.example.com");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_with_token() {
        let client = NdClient::new("https://nd.example.com").with_token("abc123");
        assert_eq!(client.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_from_config() {
        let config = NdConfig {
            url: "https://nd.example.com".to_string(),
            insecure: true,
            username: "admin".to_string(),
            password: "secret".to_string(),
        };

        // Insecure TLS must not prevent client construction.
        let client = NdClient::from_config(&config);
        assert_eq!(client.base_url(), "https://nd.example.com");
    }
}
