use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Remote capability a failure belongs to. Decides the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analyze,
    UploadTest,
    Health,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Analyze => "Analysis failed",
            Operation::UploadTest => "File upload test failed",
            Operation::Health => "API connection failed",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    /// Rejected locally, before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("{operation}: {detail}")]
    Http {
        operation: Operation,
        status: u16,
        detail: String,
    },

    #[error("{operation}: {message}")]
    Transport { operation: Operation, message: String },

    #[error("{operation}: {message}")]
    InvalidResponse { operation: Operation, message: String },
}

impl ClientError {
    pub fn transport(operation: Operation, message: impl Into<String>) -> Self {
        ClientError::Transport {
            operation,
            message: non_empty_or_unknown(message.into()),
        }
    }

    pub fn invalid_response(operation: Operation, message: impl Into<String>) -> Self {
        ClientError::InvalidResponse {
            operation,
            message: non_empty_or_unknown(message.into()),
        }
    }

    pub fn http(operation: Operation, status: StatusCode, body: &str) -> Self {
        ClientError::Http {
            operation,
            status: status.as_u16(),
            detail: http_error_detail(status, body),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

/// Picks the `detail` string out of an error body, falling back to the
/// status line when the body is not JSON or carries no string `detail`.
pub fn http_error_detail(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
        })
}

fn non_empty_or_unknown(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_detail_is_prefixed() {
        let err = ClientError::http(
            Operation::Analyze,
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":"Unsupported file type"}"#,
        );
        assert_eq!(err.to_string(), "Analysis failed: Unsupported file type");
    }

    #[test]
    fn http_detail_falls_back_to_status_line() {
        assert_eq!(
            http_error_detail(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            "HTTP 500: Internal Server Error"
        );
        assert_eq!(
            http_error_detail(StatusCode::BAD_GATEWAY, r#"{"error":"upstream"}"#),
            "HTTP 502: Bad Gateway"
        );
        // FastAPI request validation errors carry a list, not a string
        assert_eq!(
            http_error_detail(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail":[{"loc":["body"]}]}"#),
            "HTTP 422: Unprocessable Entity"
        );
    }

    #[test]
    fn empty_transport_message_becomes_unknown() {
        let err = ClientError::transport(Operation::Analyze, "");
        assert_eq!(err.to_string(), "Analysis failed: Unknown error occurred");

        let err = ClientError::transport(Operation::Analyze, "connection refused");
        assert_eq!(err.to_string(), "Analysis failed: connection refused");
    }

    #[test]
    fn prefixes_follow_operation() {
        let err = ClientError::transport(Operation::Health, "timed out");
        assert_eq!(err.to_string(), "API connection failed: timed out");

        let err = ClientError::invalid_response(Operation::UploadTest, "expected value");
        assert_eq!(err.to_string(), "File upload test failed: expected value");
    }

    #[test]
    fn validation_message_is_verbatim() {
        let err = ClientError::Validation("Please select a resume file".to_string());
        assert_eq!(err.to_string(), "Please select a resume file");
        assert!(err.is_validation());
    }
}
