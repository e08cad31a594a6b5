//! Access token storage
//!
//! The access token lives in the platform's secure key-value store; this
//! module defines the trait the rest of the SDK talks to and an in-memory
//! implementation used for composition in tests and headless environments.

pub mod memory;
mod r#trait;

#[cfg(test)]
mod tests;

pub use memory::MemoryTokenStore;
pub use r#trait::TokenStore;
