//! Course catalog endpoints

use std::sync::Arc;

use cl_core::domain::value_objects::course::{
    AvailableCourseResponse, AvailableCoursesResponse, CourseQuery, PurchasedCourseResponse,
    PurchasedCoursesResponse,
};
use cl_core::errors::ClientError;

use crate::http::endpoints::paths;
use crate::http::{ApiClient, ApiRequest};

/// Catalog browsing and purchased-course tracking
pub struct CourseApi {
    client: Arc<ApiClient>,
}

impl CourseApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /courses`
    pub async fn available_courses(
        &self,
        query: &CourseQuery,
    ) -> Result<AvailableCoursesResponse, ClientError> {
        self.client
            .execute(ApiRequest::get(paths::COURSES).with_query(query.to_pairs()))
            .await
    }

    /// `GET /courses/{id}`
    pub async fn available_course(
        &self,
        id: i64,
    ) -> Result<AvailableCourseResponse, ClientError> {
        self.client
            .execute(ApiRequest::get(format!("{}/{id}", paths::COURSES)))
            .await
    }

    /// `GET /purchased-courses`
    pub async fn purchased_courses(&self) -> Result<PurchasedCoursesResponse, ClientError> {
        self.client
            .execute(ApiRequest::get(paths::PURCHASED_COURSES))
            .await
    }

    /// `GET /purchased-courses/{id}`
    pub async fn purchased_course(
        &self,
        id: i64,
    ) -> Result<PurchasedCourseResponse, ClientError> {
        self.client
            .execute(ApiRequest::get(format!("{}/{id}", paths::PURCHASED_COURSES)))
            .await
    }
}
