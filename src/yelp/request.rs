//! Request and response types for the Yelp business search API

use crate::error::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Path of the business search endpoint, relative to the API base URL
pub const SEARCH_PATH: &str = "/v3/businesses/search";

/// What the person asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text search term, e.g. "tacos"
    pub keyword: String,
    /// Free-text location, e.g. "Oakland, CA"
    pub location: String,
}

impl SearchRequest {
    pub fn new(keyword: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location: location.into(),
        }
    }

    /// Build the outbound GET for this search
    ///
    /// Both free-text values are percent-encoded on their own, so a space
    /// becomes `%20` rather than `+`. Everything outside `A-Za-z0-9-_.~` is
    /// escaped, which is stricter than `encodeURIComponent` (it also escapes
    /// `!'()*`) but decodes to the same text.
    pub fn to_api_request(&self, base_url: &str, token: &str) -> ApiRequest {
        let url = format!(
            "{}{}?location={}&term={}",
            base_url.trim_end_matches('/'),
            SEARCH_PATH,
            urlencoding::encode(&self.location),
            urlencoding::encode(&self.keyword),
        );

        ApiRequest::get(url).bearer(token)
    }
}

/// HTTP request sent to the API
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Fully encoded URL, query string included
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
}

impl ApiRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Authorize with a bearer token
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }
}

/// HTTP response from the API
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ApiResponse {
    /// Parse the body as a loosely typed JSON document
    ///
    /// Yelp reports failures in the body, so the status code is not checked.
    pub fn json(&self) -> SearchResult<serde_json::Value> {
        serde_json::from_str(&self.text).map_err(|_| SearchError::MalformedResponse)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
