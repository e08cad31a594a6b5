//! Domain types
//!
//! - `entities` - Backend-owned objects (users, courses, reviews)
//! - `value_objects` - Request payloads and response envelopes

pub mod entities;
pub mod value_objects;

pub use entities::{
    Category, Course, CourseModule, CourseTeacher, Gender, Lesson, LessonCount, LessonKind,
    Progress, Review, ReviewAuthor, User,
};
pub use value_objects::{
    AuthResponse, AvailableCourseResponse, AvailableCoursesResponse, CourseQuery,
    CourseReviewsResponse, CourseSortBy, LastViewed, PurchasedCourse, PurchasedCourseResponse,
    PurchasedCoursesResponse, SignInPayload, SignUpPayload, UpdateProfilePayload, UserResponse,
};
