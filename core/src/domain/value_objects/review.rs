//! Review responses

use serde::{Deserialize, Serialize};

use crate::domain::entities::review::Review;

/// Envelope for `GET /reviews/course/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseReviewsResponse {
    pub reviews: Vec<Review>,
}
