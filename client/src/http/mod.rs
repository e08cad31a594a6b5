//! HTTP plumbing
//!
//! - `endpoints` - Path constants and protected-endpoint classification
//! - `request` - The request descriptor carried through the interceptor
//! - `response` - Raw response plus typed decoding
//! - `transport` - The wire abstraction and its `reqwest` implementation
//! - `client` - The authenticated client with refresh-and-retry

pub mod client;
pub mod endpoints;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod tests;

pub use client::ApiClient;
pub use request::ApiRequest;
pub use response::HttpResponse;
pub use transport::{ReqwestTransport, Transport};
