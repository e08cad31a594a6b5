//! Raw HTTP response and typed decoding

use serde::de::DeserializeOwned;
use serde::Deserialize;

use cl_core::errors::ClientError;

/// A response as it came off the wire: status plus raw body bytes
///
/// Status inspection happens in the interceptor; decoding happens after the
/// refresh policy has run its course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Server error bodies carry a `message` field when they have one
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a response with a JSON body (test helper and mock plumbing)
    pub fn json_body(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string().into_bytes())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Decode the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(|err| ClientError::Decode {
            message: err.to_string(),
        })
    }

    /// Convert a non-2xx response into its typed error
    ///
    /// 401 maps to [`ClientError::Unauthorized`]; everything else becomes
    /// [`ClientError::Api`] carrying the server message when one is present.
    pub fn into_error(self) -> ClientError {
        if self.is_unauthorized() {
            return ClientError::Unauthorized;
        }
        let message = self
            .json::<ErrorBody>()
            .map(|body| body.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&self.body).into_owned());
        ClientError::Api {
            status: self.status,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, vec![]).is_success());
        assert!(HttpResponse::new(204, vec![]).is_success());
        assert!(!HttpResponse::new(301, vec![]).is_success());
        assert!(!HttpResponse::new(500, vec![]).is_success());
    }

    #[test]
    fn test_unauthorized_maps_to_unauthorized_error() {
        let error = HttpResponse::new(401, vec![]).into_error();
        assert!(matches!(error, ClientError::Unauthorized));
    }

    #[test]
    fn test_api_error_uses_server_message() {
        let response =
            HttpResponse::json_body(404, &serde_json::json!({ "message": "Course not found" }));
        match response.into_error() {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Course not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let response = HttpResponse::new(500, b"boom".to_vec());
        match response.into_error() {
            ClientError::Api { message, .. } => assert_eq!(message, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
