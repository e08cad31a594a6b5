//! Configuration module
//!
//! - `api` - Remote API endpoint and HTTP client configuration

pub mod api;

pub use api::ApiConfig;
