use thiserror::Error;

/// Failures raised by the TronGrid client.
///
/// `Status` is permanent: the upstream answered and retrying the same request
/// would not change the outcome. `Exhausted` means every attempt failed with
/// a retryable condition (5xx, 429, or a transport error).
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("upstream unavailable after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: String },

    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("API key is not a valid header value")]
    InvalidApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_omits_body() {
        // Upstream bodies are logged, never rendered into client-facing text.
        let err = UpstreamError::Status {
            status: 404,
            body: "{\"detail\":\"secret\"}".to_string(),
        };
        assert_eq!(err.to_string(), "upstream returned HTTP 404");
    }
}
