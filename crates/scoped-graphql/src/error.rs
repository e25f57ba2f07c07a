//! Transport Errors
//!
//! Every failure a read or mutation can produce, surfaced verbatim to the caller.

use thiserror::Error;

/// Failure of a single GraphQL operation. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Variables could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
    /// Endpoint unreachable or the request was aborted
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response without a GraphQL error payload
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    /// GraphQL `errors` array, one message per entry
    #[error("{}", .0.join("; "))]
    Graphql(Vec<String>),
    /// Response `data` did not match the expected record shape
    #[error("malformed response: {0}")]
    Decode(String),
    /// Neither `data` nor `errors` present
    #[error("response contained no data")]
    MissingData,
}

impl ApiError {
    /// True when the server reported that the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            ApiError::Graphql(messages) => messages.iter().any(|m| {
                let m = m.trim_end_matches('.').to_lowercase();
                m.contains("does not exist") || m.ends_with("not found")
            }),
            _ => false,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_messages_display_verbatim() {
        let err = ApiError::Graphql(vec!["Project not found".into(), "second".into()]);
        assert_eq!(err.to_string(), "Project not found; second");
    }

    #[test]
    fn test_not_found_detection() {
        assert!(ApiError::Graphql(vec!["Project matching query does not exist.".into()]).is_not_found());
        assert!(ApiError::Graphql(vec!["Task not found".into()]).is_not_found());
        assert!(!ApiError::Graphql(vec!["Organization not found in context".into()]).is_not_found());
        assert!(!ApiError::Network("does not exist".into()).is_not_found());
    }
}
