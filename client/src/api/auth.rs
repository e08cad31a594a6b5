//! Authentication endpoints

use std::sync::Arc;

use cl_core::domain::value_objects::auth::{AuthResponse, SignInPayload, SignUpPayload};
use cl_core::errors::ClientError;
use cl_shared::types::MessageResponse;

use crate::http::endpoints::paths;
use crate::http::{ApiClient, ApiRequest};

/// Sign-in, sign-up, refresh and logout
pub struct AuthenticationApi {
    client: Arc<ApiClient>,
}

impl AuthenticationApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /authentication/sign-in`
    pub async fn sign_in(&self, payload: &SignInPayload) -> Result<AuthResponse, ClientError> {
        self.client
            .execute(ApiRequest::post(paths::SIGN_IN).with_json(payload)?)
            .await
    }

    /// `POST /authentication/sign-up`
    pub async fn sign_up(&self, payload: &SignUpPayload) -> Result<MessageResponse, ClientError> {
        self.client
            .execute(ApiRequest::post(paths::SIGN_UP).with_json(payload)?)
            .await
    }

    /// `POST /authentication/refresh-tokens`
    ///
    /// Manual refresh; the interceptor performs its own refresh internally
    /// when a protected call hits a 401.
    pub async fn refresh_tokens(&self) -> Result<AuthResponse, ClientError> {
        self.client
            .execute(ApiRequest::post(paths::REFRESH_TOKENS))
            .await
    }

    /// `POST /authentication/logout`
    pub async fn logout(&self) -> Result<MessageResponse, ClientError> {
        self.client.execute(ApiRequest::post(paths::LOGOUT)).await
    }
}
