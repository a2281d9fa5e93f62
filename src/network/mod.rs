//! HTTP networking module
//!
//! Provides the HTTP client used to reach the Yelp API.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::user_agent;
