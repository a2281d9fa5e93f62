//! Search handling
//!
//! Turns a keyword and a location into one Yelp request and one outcome.

mod handler;

pub use handler::SearchHandler;
