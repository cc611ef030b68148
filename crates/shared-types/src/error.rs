use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of search failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchErrorKind {
    /// The request never produced a response (DNS, connection, aborted body).
    Transport,
    /// The endpoint answered with a non-2xx status.
    HttpStatus,
    /// The body was not JSON or lacked `body.hits`.
    MalformedBody,
}

impl fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchErrorKind::Transport => write!(f, "Transport"),
            SearchErrorKind::HttpStatus => write!(f, "HttpStatus"),
            SearchErrorKind::MalformedBody => write!(f, "MalformedBody"),
        }
    }
}

/// A failed search. Every kind collapses into the same inline error state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchError {
    pub kind: SearchErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl SearchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: SearchErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    /// A non-2xx response. `reason` is the canonical reason phrase, if known.
    pub fn http_status(status: u16, reason: Option<&str>) -> Self {
        let message = match reason {
            Some(reason) => format!("API Error: {status} {reason}"),
            None => format!("API Error: {status}"),
        };
        Self {
            kind: SearchErrorKind::HttpStatus,
            message,
            status: Some(status),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: SearchErrorKind::MalformedBody,
            message: message.into(),
            status: None,
        }
    }

    /// Text shown in place of the results list.
    pub fn user_message(&self) -> String {
        format!(
            "Error loading results: {}. Please try again later.",
            self.message
        )
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SearchError {}
