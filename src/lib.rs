//! craving-lunch: a chat-bot action that finds somewhere to eat
//!
//! Given a keyword and a location, the action asks the Yelp business search
//! API for matches and hands the top five back to the host platform with a
//! star rendering of each rating.

pub mod config;
pub mod error;
pub mod host;
pub mod network;
pub mod search;
pub mod yelp;

pub use config::Settings;
pub use error::{ErrorKind, ErrorReport, SearchError};
pub use host::{Host, MemoryHost, ProcessHost};
pub use search::SearchHandler;
pub use yelp::{SearchRequest, SearchResponse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
