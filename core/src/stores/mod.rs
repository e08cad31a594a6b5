//! Store abstractions for device-local persistence

pub mod token;

pub use token::{MemoryTokenStore, TokenStore};
