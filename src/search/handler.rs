//! The lunch search action

use crate::config::{Settings, YelpSettings};
use crate::error::{SearchError, SearchResult};
use crate::host::Host;
use crate::network::HttpClient;
use crate::yelp::{ResponseShape, SearchRequest, SearchResponse};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Runs one Yelp search per invocation and reports the outcome to the host
pub struct SearchHandler {
    /// HTTP client for making requests
    client: HttpClient,
    /// API root and credential variable
    yelp: YelpSettings,
}

impl SearchHandler {
    /// Create a handler from a client and the Yelp settings
    pub fn new(client: HttpClient, yelp: YelpSettings) -> Self {
        Self { client, yelp }
    }

    /// Create a handler and its client from full settings
    pub fn from_settings(settings: &Settings) -> SearchResult<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        Ok(Self::new(client, settings.yelp.clone()))
    }

    /// Handle an invocation, delivering exactly one outcome to `host`
    ///
    /// The error is also returned so the caller can set an exit status.
    pub async fn handle(&self, request: &SearchRequest, host: &dyn Host) -> SearchResult<()> {
        let span = info_span!("invocation", id = %Uuid::new_v4());

        match self.search(request, host).instrument(span.clone()).await {
            Ok(payload) => {
                span.in_scope(|| {
                    info!(
                        "Returning {} of {:?} businesses",
                        payload.top_count, payload.overall_count
                    )
                });
                host.success(payload);
                Ok(())
            }
            Err(e) => {
                span.in_scope(|| warn!("Search failed ({}): {}", e.kind(), e));
                host.fail(e.report(request));
                Err(e)
            }
        }
    }

    /// Look up the credential, call Yelp once and shape the result
    pub async fn search(
        &self,
        request: &SearchRequest,
        host: &dyn Host,
    ) -> SearchResult<SearchResponse> {
        let var = self.yelp.api_key_env.as_str();
        let token = match host.env(var) {
            Some(token) if !token.trim().is_empty() => token,
            _ => {
                return Err(SearchError::MissingCredential {
                    var: var.to_string(),
                })
            }
        };

        info!(
            "Searching Yelp for '{}' in '{}'",
            request.keyword, request.location
        );

        let api_request = request.to_api_request(&self.yelp.base_url, &token);
        let response = self.client.execute(api_request).await?;
        if !response.is_success() {
            debug!("Yelp answered HTTP {}, reading body anyway", response.status);
        }

        let doc = response.json()?;
        let (businesses, total) = ResponseShape::classify(doc).into_result(var)?;

        Ok(SearchResponse::from_businesses(businesses, total))
    }
}
