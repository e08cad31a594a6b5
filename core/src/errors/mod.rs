//! Error types for the client SDK
//!
//! Transport and API failures are discriminated enum variants rather than
//! untyped payload inspection: downstream logic switches on the variant.

use thiserror::Error;

/// Errors produced by the HTTP client, the token store and response decoding
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server rejected the request with status 401
    #[error("request was not authorized")]
    Unauthorized,

    /// The token refresh call itself failed; the session has been cleared
    #[error("token refresh failed: {source}")]
    RefreshFailed {
        #[source]
        source: Box<ClientError>,
    },

    /// The request never produced a response (connect, TLS, timeout)
    #[error("network error: {message}")]
    Network { message: String },

    /// The server answered with an unexpected non-2xx status
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The token store failed to read or write
    #[error("secure storage failure: {message}")]
    Storage { message: String },

    /// A JSON body could not be encoded or decoded
    #[error("failed to encode or decode a JSON body: {message}")]
    Decode { message: String },
}

impl ClientError {
    /// Whether this error is the terminal refresh failure that signs the
    /// user out
    pub fn is_refresh_failure(&self) -> bool {
        matches!(self, ClientError::RefreshFailed { .. })
    }

    /// Whether this error is a plain 401 rejection
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_failed_wraps_source() {
        let error = ClientError::RefreshFailed {
            source: Box::new(ClientError::Api {
                status: 500,
                message: "refresh rejected".to_string(),
            }),
        };
        assert!(error.is_refresh_failure());
        assert!(error.to_string().contains("token refresh failed"));
        assert!(error.to_string().contains("refresh rejected"));
    }

    #[test]
    fn test_unauthorized_kind() {
        assert!(ClientError::Unauthorized.is_unauthorized());
        assert!(!ClientError::Network {
            message: "timeout".to_string()
        }
        .is_unauthorized());
    }
}
