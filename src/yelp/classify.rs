//! Classification of a parsed search response

use crate::error::SearchError;
use serde_json::Value;

/// Error code Yelp returns when the Authorization header is absent
pub const TOKEN_MISSING: &str = "TOKEN_MISSING";
/// Error code Yelp returns for a revoked or unknown token
pub const UNAUTHORIZED_ACCESS_TOKEN: &str = "UNAUTHORIZED_ACCESS_TOKEN";

/// The shapes a search response body can take
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// A `businesses` list, possibly empty
    Businesses {
        businesses: Vec<Value>,
        total: Option<u64>,
    },
    TokenMissing,
    UnauthorizedToken,
    /// Some other error object
    ApiError { code: String, description: String },
    /// Neither businesses nor an error
    Empty,
}

impl ResponseShape {
    /// Classify a parsed response, checking businesses first
    pub fn classify(mut doc: Value) -> Self {
        let total = doc.get("total").and_then(Value::as_u64);

        if let Some(Value::Array(businesses)) = doc.get_mut("businesses").map(Value::take) {
            return Self::Businesses { businesses, total };
        }

        let error = match doc.get("error") {
            Some(error) if is_truthy(error) => error,
            _ => return Self::Empty,
        };

        let code = error.get("code").map(text_of).unwrap_or_default();
        match code.as_str() {
            TOKEN_MISSING => Self::TokenMissing,
            UNAUTHORIZED_ACCESS_TOKEN => Self::UnauthorizedToken,
            _ => Self::ApiError {
                code,
                description: error.get("description").map(text_of).unwrap_or_default(),
            },
        }
    }

    /// Split into the success data or the matching error
    ///
    /// `var` names the credential variable for remediation hints.
    pub fn into_result(self, var: &str) -> Result<(Vec<Value>, Option<u64>), SearchError> {
        match self {
            Self::Businesses { businesses, total } => Ok((businesses, total)),
            Self::TokenMissing => Err(SearchError::TokenMissing {
                var: var.to_string(),
            }),
            Self::UnauthorizedToken => Err(SearchError::InvalidCredential {
                var: var.to_string(),
            }),
            Self::ApiError { code, description } => {
                Err(SearchError::Upstream { code, description })
            }
            Self::Empty => Err(SearchError::EmptyResponse),
        }
    }
}

/// JSON values that would count as present in a boolean test
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a scalar as plain text, without JSON quoting
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
