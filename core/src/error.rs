//! Error types for the fetch helper.
//!
//! # Design
//! Every failure a single fetch can hit lands in one of three categories:
//! the exchange never completed (`Transport`), the server answered with a
//! non-2xx status (`HttpStatus`), or the body could not be decoded in its
//! declared format (`Parse`). `Serialization` only arises while building a
//! request body, before anything is sent.

/// Errors returned by `fetch_data` and the API clients built on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No response was received (unreachable host, DNS failure, bad URL).
    #[error("Transport failed. {0}")]
    Transport(String),

    /// The server responded with a status outside 200-299.
    #[error("Fetch failed. {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// The body could not be decoded per its content-type.
    #[error("Parse failed. {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON.
    #[error("Serialization failed. {0}")]
    Serialization(String),
}

/// Category of a `FetchError`, for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    HttpStatus,
    Parse,
    Serialization,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(_) => ErrorKind::Transport,
            FetchError::HttpStatus { .. } => ErrorKind::HttpStatus,
            FetchError::Parse(_) => ErrorKind::Parse,
            FetchError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Status code of an `HttpStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error raised by a `Transport` when no response could be obtained.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_code_and_reason() {
        let err = FetchError::HttpStatus {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Fetch failed. 404 Not Found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), ErrorKind::HttpStatus);
    }

    #[test]
    fn transport_error_converts() {
        let err: FetchError = TransportError("connection refused".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.status().is_none());
        assert!(err.to_string().contains("connection refused"));
    }
}
