use thiserror::Error;

/// Errors from talking to the upstream inference service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Http(String),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_display() {
        let err = UpstreamError::Http("connection refused".to_string());
        assert_eq!(err.to_string(), "upstream request failed: connection refused");
    }

    #[test]
    fn test_upstream_status_display() {
        let err = UpstreamError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn test_upstream_malformed_display() {
        let err = UpstreamError::Malformed("expected array".to_string());
        assert_eq!(err.to_string(), "malformed upstream response: expected array");
    }
}
