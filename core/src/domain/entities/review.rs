//! Course review entities

use serde::{Deserialize, Serialize};

/// The student who left a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
}

/// A course review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: f64,
    pub comment: String,
    pub student: ReviewAuthor,
}
