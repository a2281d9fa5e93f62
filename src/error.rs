//! Error taxonomy for a search invocation
//!
//! Every failure is terminal for the invocation. The host receives an
//! [`ErrorReport`] carrying a diagnostic message for the skill author and a
//! message that is safe to show to the person chatting with the bot.

use crate::yelp::SearchRequest;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while handling a search
#[derive(Debug, Error)]
pub enum SearchError {
    /// No token in the environment; nothing was sent
    #[error("No API key")]
    MissingCredential { var: String },

    /// Yelp says the request carried no token
    #[error("The API key for Yelp is missing. Double-check your {var} environment variable.")]
    TokenMissing { var: String },

    /// Yelp rejected the token
    #[error("Yelp rejected the API key. Double-check your {var} environment variable.")]
    InvalidCredential { var: String },

    /// Any other error object reported by Yelp
    #[error("{code}: {description}")]
    Upstream { code: String, description: String },

    #[error("No results were found in Yelp’s response.")]
    EmptyResponse,

    #[error("Yelp returned an invalid response.")]
    MalformedResponse,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP client could not be configured
    #[error("{0}")]
    Client(String),
}

/// Closed set of failure kinds surfaced to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCredential,
    InvalidCredential,
    UpstreamError,
    EmptyResponse,
    MalformedResponse,
    TransportError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "missing credential"),
            Self::InvalidCredential => write!(f, "invalid credential"),
            Self::UpstreamError => write!(f, "upstream error"),
            Self::EmptyResponse => write!(f, "empty response"),
            Self::MalformedResponse => write!(f, "malformed response"),
            Self::TransportError => write!(f, "transport error"),
        }
    }
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential { .. } | Self::TokenMissing { .. } => {
                ErrorKind::MissingCredential
            }
            Self::InvalidCredential { .. } => ErrorKind::InvalidCredential,
            Self::Upstream { .. } => ErrorKind::UpstreamError,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::MalformedResponse => ErrorKind::MalformedResponse,
            Self::Transport(_) | Self::Client(_) => ErrorKind::TransportError,
        }
    }

    /// Label prefixed to the diagnostic message
    fn error_type(&self) -> &'static str {
        match self {
            Self::Upstream { .. } => "Yelp error",
            Self::Transport(e) => transport_error_type(e),
            _ => "Error",
        }
    }

    /// Diagnostic message for the skill author
    pub fn internal_message(&self) -> String {
        let message = self.to_string();
        let internal = match self {
            Self::MissingCredential { .. } => message,
            _ if message.is_empty() => String::new(),
            _ => format!("{}: {}", self.error_type(), message),
        };

        if internal.is_empty() {
            "Unknown error".to_string()
        } else {
            internal
        }
    }

    /// Remediation appended to the user message, if any
    fn remediation(&self) -> Option<String> {
        match self {
            Self::MissingCredential { var } => Some(format!(
                "No API key for Yelp is available. This skill uses an environment variable called {} which must be set.",
                var
            )),
            Self::TokenMissing { var } | Self::InvalidCredential { var } => Some(format!(
                "Double-check the {} environment variable.",
                var
            )),
            _ => None,
        }
    }

    /// Build the two-channel report for the host
    pub fn report(&self, request: &SearchRequest) -> ErrorReport {
        let mut user_message = format!(
            "I tried to search Yelp for `{}` in `{}`, but it didn’t work.",
            request.keyword, request.location
        );
        if let Some(hint) = self.remediation() {
            user_message.push(' ');
            user_message.push_str(&hint);
        }

        ErrorReport {
            kind: self.kind(),
            internal_error_message: self.internal_message(),
            user_message,
        }
    }
}

/// Name a reqwest failure the way a stack trace would
fn transport_error_type(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "TimeoutError"
    } else if error.is_connect() {
        "ConnectError"
    } else if error.is_redirect() {
        "RedirectError"
    } else if error.is_decode() {
        "DecodeError"
    } else if error.is_body() {
        "BodyError"
    } else if error.is_request() {
        "RequestError"
    } else {
        "Error"
    }
}

/// Structured failure handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    #[serde(skip)]
    pub kind: ErrorKind,
    pub internal_error_message: String,
    pub user_message: String,
}

pub type SearchResult<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SearchRequest {
        SearchRequest::new("tacos", "Oakland, CA")
    }

    #[test]
    fn test_missing_credential_report() {
        let err = SearchError::MissingCredential {
            var: "YELP_API_KEY".to_string(),
        };
        let report = err.report(&request());

        assert_eq!(report.kind, ErrorKind::MissingCredential);
        assert_eq!(report.internal_error_message, "No API key");
        assert!(report
            .user_message
            .starts_with("I tried to search Yelp for `tacos` in `Oakland, CA`"));
        assert!(report.user_message.contains("YELP_API_KEY"));
    }

    #[test]
    fn test_invalid_credential_has_hint() {
        let err = SearchError::InvalidCredential {
            var: "YELP_API_KEY".to_string(),
        };
        let report = err.report(&request());

        assert_eq!(err.kind(), ErrorKind::InvalidCredential);
        assert_eq!(
            report.internal_error_message,
            "Error: Yelp rejected the API key. Double-check your YELP_API_KEY environment variable."
        );
        assert!(report
            .user_message
            .ends_with("Double-check the YELP_API_KEY environment variable."));
    }

    #[test]
    fn test_upstream_message() {
        let err = SearchError::Upstream {
            code: "VALIDATION_ERROR".to_string(),
            description: "location is required".to_string(),
        };
        let report = err.report(&request());

        assert_eq!(err.kind(), ErrorKind::UpstreamError);
        assert_eq!(
            report.internal_error_message,
            "Yelp error: VALIDATION_ERROR: location is required"
        );
        assert_eq!(
            report.user_message,
            "I tried to search Yelp for `tacos` in `Oakland, CA`, but it didn’t work."
        );
    }

    #[test]
    fn test_empty_message_becomes_unknown() {
        let err = SearchError::Client(String::new());
        assert_eq!(err.internal_message(), "Unknown error");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = SearchError::MalformedResponse.report(&request());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json["internalErrorMessage"],
            "Error: Yelp returned an invalid response."
        );
        assert!(json.get("userMessage").is_some());
        assert!(json.get("kind").is_none());
    }
}
