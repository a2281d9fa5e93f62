//! HTTP client for calling the Yelp API

use super::user_agent::user_agent;
use crate::config::OutgoingSettings;
use crate::error::{SearchError, SearchResult};
use crate::yelp::{ApiRequest, ApiResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper configured from [`OutgoingSettings`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> SearchResult<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> SearchResult<Self> {
        let mut builder = Client::builder()
            .user_agent(user_agent(settings.useragent_suffix.as_deref()))
            .gzip(true)
            .brotli(true);

        // No timeout unless one is configured
        if let Some(secs) = settings.request_timeout {
            let timeout = Duration::try_from_secs_f64(secs).map_err(|e| {
                SearchError::Client(format!("Invalid request timeout {}: {}", secs, e))
            })?;
            builder = builder.timeout(timeout);
        }

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url).map_err(client_error)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http).map_err(client_error)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https).map_err(client_error)?);
            }
        }

        let client = builder.build().map_err(client_error)?;

        Ok(Self {
            client,
            extra_headers: settings.extra_headers.clone(),
        })
    }

    /// Execute a GET request and read the whole body
    pub async fn execute(&self, request: ApiRequest) -> SearchResult<ApiResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Configured headers first so request headers win
        for (key, value) in self.extra_headers.iter().chain(request.headers.iter()) {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| SearchError::Client(format!("Invalid header name '{}': {}", key, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SearchError::Client(format!("Invalid value for header '{}': {}", key, e)))?;
            headers.insert(name, value);
        }

        let response = self.client.get(&request.url).headers(headers).send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into ApiResponse
    async fn parse_response(response: Response) -> SearchResult<ApiResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        debug!("Received HTTP {} from {}", status, url);

        let text = response.text().await?;

        Ok(ApiResponse { status, text, url })
    }
}

fn client_error(e: reqwest::Error) -> SearchError {
    SearchError::Client(format!("Failed to configure HTTP client: {}", e))
}
