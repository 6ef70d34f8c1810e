use std::fmt;

/// Custom error type for report operations
#[derive(Debug)]
pub enum ReportError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Upstream call failed terminally (status, body and headers are kept for the run log)
    RequestFailed {
        status: u16,
        body: String,
        headers: String,
    },
    /// JSON parsing error
    Json(String),
    /// Organization identifier could not be decoded
    Decode(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Both access and refresh tokens are expired
    TokenExpired(String),
    /// Configuration error
    Config(String),
    /// Failed to write report or log files
    Output(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ReportError::RequestFailed {
                status,
                body,
                headers,
            } => write!(
                f,
                "Request FAILED: {}\n{}\nAPI Response Headers: {}",
                status, body, headers
            ),
            ReportError::Json(msg) => write!(f, "JSON error: {}", msg),
            ReportError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ReportError::TokenNotFound(msg) => write!(f, "{}", msg),
            ReportError::TokenExpired(msg) => write!(f, "{}", msg),
            ReportError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ReportError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        ReportError::Http(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Output(err.to_string())
    }
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display_includes_body_and_headers() {
        let err = ReportError::RequestFailed {
            status: 500,
            body: "{\"message\":\"boom\"}".to_string(),
            headers: "{\"trackingid\": \"abc\"}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Request FAILED: 500"));
        assert!(msg.contains("boom"));
        assert!(msg.contains("trackingid"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }

    #[test]
    fn test_decode_error_display() {
        let err = ReportError::Decode("bad base64".to_string());
        assert!(err.to_string().contains("Decode error"));
        assert!(err.to_string().contains("bad base64"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ReportError::Config("Missing partner org".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Missing partner org"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ReportError = json_err.into();
        match err {
            ReportError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ReportError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ReportError = io_err.into();
        match err {
            ReportError::Output(msg) => assert!(msg.contains("read-only")),
            _ => panic!("Expected ReportError::Output"),
        }
    }

    #[test]
    fn test_error_source_none_for_non_http() {
        use std::error::Error;
        let err = ReportError::TokenExpired("expired".to_string());
        assert!(err.source().is_none());
    }
}
