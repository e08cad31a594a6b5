//! Request descriptor

use reqwest::Method;
use serde::Serialize;

use cl_core::errors::ClientError;

/// An outgoing API call
///
/// Created per call and owned by the interceptor. `retried` is the
/// loop-guard for the refresh policy: it is inspected once per dispatch and
/// flipped to `true` at most once, so a 401 can trigger at most one
/// refresh-and-retry.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path relative to the API prefix, e.g. `/courses/3`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Bearer token attached by the client before dispatch
    pub bearer: Option<String>,
    /// Set once the request has been re-dispatched after a refresh
    pub retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Attach a JSON body
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body).map_err(|err| ClientError::Decode {
            message: err.to_string(),
        })?);
        Ok(self)
    }

    /// Attach query parameters
    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub(crate) fn set_bearer(&mut self, token: &str) {
        self.bearer = Some(token.to_string());
    }
}
