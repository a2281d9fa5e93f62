//! Yelp business search
//!
//! Builds the search request, classifies the response body and turns the
//! businesses into the payload returned to the host.

mod classify;
mod request;
pub mod stars;
mod transform;

pub use classify::{ResponseShape, TOKEN_MISSING, UNAUTHORIZED_ACCESS_TOKEN};
pub use request::{ApiRequest, ApiResponse, SearchRequest, SEARCH_PATH};
pub use transform::{SearchResponse, TOP_RESULTS};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.yelp.com";

/// Environment variable that holds the API key unless configured otherwise
pub const DEFAULT_API_KEY_ENV: &str = "YELP_API_KEY";
