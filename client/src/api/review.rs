//! Course review endpoints

use std::sync::Arc;

use cl_core::domain::value_objects::review::CourseReviewsResponse;
use cl_core::errors::ClientError;

use crate::http::endpoints::paths;
use crate::http::{ApiClient, ApiRequest};

/// Review listings for a course
pub struct ReviewApi {
    client: Arc<ApiClient>,
}

impl ReviewApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /reviews/course/{id}`
    pub async fn course_reviews(
        &self,
        course_id: i64,
    ) -> Result<CourseReviewsResponse, ClientError> {
        self.client
            .execute(ApiRequest::get(format!(
                "{}/{course_id}",
                paths::COURSE_REVIEWS
            )))
            .await
    }
}
