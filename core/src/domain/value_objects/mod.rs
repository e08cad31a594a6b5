//! Request payloads and response envelopes

pub mod auth;
pub mod course;
pub mod review;
pub mod user;

pub use auth::{AuthResponse, SignInPayload, SignUpPayload};
pub use course::{
    AvailableCourseResponse, AvailableCoursesResponse, CourseQuery, CourseSortBy, LastViewed,
    PurchasedCourse, PurchasedCourseResponse, PurchasedCoursesResponse,
};
pub use review::CourseReviewsResponse;
pub use user::{UpdateProfilePayload, UserResponse};
