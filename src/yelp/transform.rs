//! Shaping Yelp businesses into the success payload

use super::stars;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of businesses kept from the first page
pub const TOP_RESULTS: usize = 5;

/// Address lines that are always present on a returned business
const ADDRESS_LINES: [&str; 3] = ["address1", "address2", "address3"];

/// Success payload handed to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Up to five businesses, in upstream order
    pub businesses: Vec<Value>,
    /// Number of businesses kept
    pub top_count: usize,
    /// Total reported by Yelp, which may exceed the kept count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_count: Option<u64>,
}

impl SearchResponse {
    /// Keep the top businesses and annotate each one
    pub fn from_businesses(businesses: Vec<Value>, total: Option<u64>) -> Self {
        let businesses: Vec<Value> = businesses
            .into_iter()
            .take(TOP_RESULTS)
            .map(annotate)
            .collect();

        Self {
            top_count: businesses.len(),
            businesses,
            overall_count: total,
        }
    }
}

/// Add `stars` and blank out missing address lines
fn annotate(mut business: Value) -> Value {
    let Some(fields) = business.as_object_mut() else {
        return business;
    };

    let rating = fields.get("rating").and_then(Value::as_f64).unwrap_or(0.0);
    fields.insert("stars".to_string(), Value::String(stars::render(rating)));

    let location = fields
        .entry("location")
        .or_insert_with(|| Value::Object(Map::new()));
    if !location.is_object() {
        *location = Value::Object(Map::new());
    }

    if let Some(location) = location.as_object_mut() {
        for line in ADDRESS_LINES {
            let blank = match location.get(line) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(_) => false,
            };
            if blank {
                location.insert(line.to_string(), Value::String(String::new()));
            }
        }
    }

    business
}
