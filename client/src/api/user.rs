//! User profile endpoints

use std::sync::Arc;

use cl_core::domain::value_objects::user::{UpdateProfilePayload, UserResponse};
use cl_core::errors::ClientError;
use cl_shared::types::MessageResponse;

use crate::http::endpoints::paths;
use crate::http::{ApiClient, ApiRequest};

/// Profile reads and updates for the signed-in user
pub struct UserApi {
    client: Arc<ApiClient>,
}

impl UserApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /users/me`
    pub async fn get_my_profile(&self) -> Result<UserResponse, ClientError> {
        self.client.execute(ApiRequest::get(paths::MY_PROFILE)).await
    }

    /// `PATCH /users/me`
    pub async fn update_my_profile(
        &self,
        payload: &UpdateProfilePayload,
    ) -> Result<MessageResponse, ClientError> {
        self.client
            .execute(ApiRequest::patch(paths::MY_PROFILE).with_json(payload)?)
            .await
    }
}
