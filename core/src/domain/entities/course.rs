//! Course catalog entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Search-engine keywords attached to a course
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Lesson counter embedded in module listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCount {
    pub lessons: u32,
}

/// Lesson kind, either a video or a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Quiz,
}

/// A single lesson inside a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: i64,
    pub order: u32,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    pub module_id: i64,
    pub video_duration: Option<u32>,
    pub is_completed: bool,
}

/// A course module
///
/// Listing endpoints carry only a lesson count; the purchased-course detail
/// endpoint expands `lessons` and adds an `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<LessonCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
}

/// Completion statistics for a purchased course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub progress_percentage: f64,
    pub lessons_count: u32,
    pub completed_lessons_count: u32,
}

/// Course category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// The teacher presenting a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTeacher {
    pub first_name: String,
    pub last_name: String,
    pub experience_years: Option<u32>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub biography: Option<String>,
}

/// A marketplace course
///
/// The optional fields (`category`, lesson totals) only appear on the
/// single-course detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub alias: String,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub price: String,
    pub old_price: String,
    pub meta: Meta,
    pub status: String,
    pub preview_image_url: String,
    pub promo_video_url: String,
    #[serde(rename = "promoVideoUUID")]
    pub promo_video_uuid: Option<String>,
    pub teacher: CourseTeacher,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_lessons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_video_lessons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quiz_lessons: Option<u32>,
}
