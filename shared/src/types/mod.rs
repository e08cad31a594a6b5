//! Common wire type definitions
//!
//! - `pagination` - Pagination metadata for list endpoints
//! - `response` - Generic API response shapes

pub mod pagination;
pub mod response;

pub use pagination::{PageMeta, SortOrder};
pub use response::MessageResponse;
