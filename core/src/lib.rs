//! # CourseLane Core
//!
//! Domain layer for the CourseLane client SDK. This crate contains the
//! domain entities and wire payloads, the error types, the token store
//! abstraction, and the session service that owns the signed-in state.

pub mod domain;
pub mod errors;
pub mod session;
pub mod stores;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use session::{AuthSession, Session};
pub use stores::*;
