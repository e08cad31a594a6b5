//! Authenticated API client with refresh-and-retry
//!
//! Every outgoing call gets the stored bearer token attached. A 401 from a
//! protected endpoint triggers exactly one token refresh followed by one
//! re-dispatch of the original request; a failed refresh clears the session
//! and surfaces as [`ClientError::RefreshFailed`]. Everything else is
//! returned to the caller untouched.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{error, warn};

use cl_core::domain::value_objects::auth::AuthResponse;
use cl_core::errors::ClientError;
use cl_core::session::Session;
use cl_core::stores::token::TokenStore;
use cl_shared::config::ApiConfig;

use super::endpoints::{is_protected, paths};
use super::request::ApiRequest;
use super::response::HttpResponse;
use super::transport::{ReqwestTransport, Transport};

/// The authenticated HTTP client
///
/// Collaborators are injected: the transport carries bytes, the token store
/// owns the persisted access token, and the session is told to clear itself
/// when a refresh fails. The client holds no global state of its own.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    token_store: Arc<dyn TokenStore>,
    session: Arc<dyn Session>,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        token_store: Arc<dyn TokenStore>,
        session: Arc<dyn Session>,
    ) -> Self {
        Self {
            transport,
            token_store,
            session,
        }
    }

    /// Convenience constructor wiring a [`ReqwestTransport`] from config
    pub fn from_config(
        config: &ApiConfig,
        token_store: Arc<dyn TokenStore>,
        session: Arc<dyn Session>,
    ) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), token_store, session))
    }

    /// Dispatch a request, transparently recovering from one expired-token
    /// rejection
    ///
    /// Returns the response for any status; converting non-2xx statuses into
    /// typed errors is the caller's (or [`ApiClient::execute`]'s) concern.
    pub async fn send(&self, mut request: ApiRequest) -> Result<HttpResponse, ClientError> {
        if let Some(token) = self.token_store.get().await? {
            request.set_bearer(&token);
        }

        loop {
            let response = self.transport.dispatch(&request).await?;

            // The retried marker is checked once and set at most once, so
            // this loop runs at most twice.
            if response.is_unauthorized() && is_protected(&request.path) && !request.retried {
                request.retried = true;
                warn!(path = %request.path, "401 on protected endpoint, refreshing token");

                match self.refresh_access_token().await {
                    Ok(token) => {
                        self.token_store.set(&token).await?;
                        request.set_bearer(&token);
                        continue;
                    }
                    Err(source) => {
                        error!("token refresh failed, clearing session: {source}");
                        self.session.clear().await;
                        return Err(ClientError::RefreshFailed {
                            source: Box::new(source),
                        });
                    }
                }
            }

            return Ok(response);
        }
    }

    /// Dispatch a request and decode a 2xx JSON body, mapping non-2xx
    /// statuses to typed errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(response.into_error());
        }
        response.json()
    }

    /// Exchange the refresh cookie for a fresh access token
    ///
    /// The refresh endpoint is unprotected and takes no body; the current
    /// bearer is still attached when present, matching the behavior of every
    /// other outgoing call.
    async fn refresh_access_token(&self) -> Result<String, ClientError> {
        let mut request = ApiRequest::post(paths::REFRESH_TOKENS);
        if let Some(token) = self.token_store.get().await? {
            request.set_bearer(&token);
        }

        let response = self.transport.dispatch(&request).await?;
        if !response.is_success() {
            return Err(response.into_error());
        }
        let auth: AuthResponse = response.json()?;
        Ok(auth.access_token)
    }
}
