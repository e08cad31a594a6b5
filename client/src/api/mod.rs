//! Typed endpoint wrappers
//!
//! One thin API type per backend domain, each a facade over
//! [`ApiClient`](crate::http::ApiClient):
//! - `auth` - sign-in, sign-up, token refresh, logout
//! - `user` - profile reads and updates
//! - `course` - catalog and purchased courses
//! - `review` - course reviews

pub mod auth;
pub mod course;
pub mod review;
pub mod user;

#[cfg(test)]
mod tests;

pub use auth::AuthenticationApi;
pub use course::CourseApi;
pub use review::ReviewApi;
pub use user::UserApi;
