//! Wire transport
//!
//! The [`Transport`] trait is the seam between the interceptor logic and the
//! actual network; tests substitute a scripted mock, production uses
//! [`ReqwestTransport`].

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::debug;

use cl_core::errors::ClientError;
use cl_shared::config::ApiConfig;

use super::request::ApiRequest;
use super::response::HttpResponse;

/// Dispatch a request descriptor and return whatever came back
///
/// Implementations return `Ok` for any HTTP status; `Err` is reserved for
/// failures that never produced a response (connect, TLS, timeout).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, request: &ApiRequest) -> Result<HttpResponse, ClientError>;
}

/// Production transport over `reqwest`
///
/// The cookie store is enabled because the refresh token travels as an
/// HTTP-only cookie set by the sign-in endpoint.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|err| ClientError::Network {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.joined_base_url(),
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn dispatch(&self, request: &ApiRequest) -> Result<HttpResponse, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, retried = request.retried, "dispatching request");

        let mut builder = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| ClientError::Network {
            message: err.to_string(),
        })?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| ClientError::Network {
                message: err.to_string(),
            })?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}
