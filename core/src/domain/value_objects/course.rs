//! Course catalog payloads and responses

use serde::{Deserialize, Serialize};

use cl_shared::types::{PageMeta, SortOrder};

use crate::domain::entities::course::{Course, Progress};

/// Sort key for course listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseSortBy {
    Title,
    Price,
    CreatedAt,
}

impl CourseSortBy {
    /// Query-string value for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseSortBy::Title => "title",
            CourseSortBy::Price => "price",
            CourseSortBy::CreatedAt => "createdAt",
        }
    }
}

/// Query parameters for `GET /courses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub sort_by: Option<CourseSortBy>,
    pub order: Option<SortOrder>,
}

impl Default for CourseQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            category_id: None,
            sort_by: None,
            order: None,
        }
    }
}

impl CourseQuery {
    /// Render the query as URL parameter pairs, omitting unset filters
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryId".to_string(), category_id.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.as_str().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order".to_string(), order.as_str().to_string()));
        }
        pairs
    }
}

/// Paginated catalog listing from `GET /courses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCoursesResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub available_courses: Vec<Course>,
}

/// Single-course detail from `GET /courses/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableCourseResponse {
    pub course: Course,
}

/// A purchased course together with its progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedCourse {
    pub course: Course,
    pub progress: Progress,
}

/// Paginated listing from `GET /purchased-courses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedCoursesResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub purchased_courses: Vec<PurchasedCourse>,
}

/// Resume position inside a purchased course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastViewed {
    pub last_lesson_id: i64,
    pub last_module_id: i64,
    pub is_completed: bool,
}

/// Detail from `GET /purchased-courses/{id}`: full module/lesson tree plus
/// progress and the last viewed position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedCourseResponse {
    pub course: Course,
    pub progress: Progress,
    pub last_viewed: LastViewed,
}
