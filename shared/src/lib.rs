//! Shared utilities and common types for the CourseLane client SDK
//!
//! This crate provides common functionality used across all SDK modules:
//! - Configuration types
//! - Common wire types (pagination, message responses)
//! - Utility functions (phone input mask, form validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::ApiConfig;
pub use types::{MessageResponse, PageMeta, SortOrder};
pub use utils::{phone, validation};
