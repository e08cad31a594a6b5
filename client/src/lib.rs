//! # CourseLane Client
//!
//! Authenticated HTTP layer of the CourseLane SDK. Provides the bearer-token
//! interceptor with transparent refresh-and-retry, the transport abstraction
//! over `reqwest`, and typed wrappers for every marketplace endpoint.

pub mod api;
pub mod http;

// Re-export the commonly composed pieces
pub use api::{AuthenticationApi, CourseApi, ReviewApi, UserApi};
pub use http::{ApiClient, ApiRequest, HttpResponse, ReqwestTransport, Transport};
