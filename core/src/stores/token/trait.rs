//! Token store trait defining the interface for access token persistence.

use async_trait::async_trait;

use crate::errors::ClientError;

/// Storage for the opaque access token
///
/// Implementations wrap a platform secure key-value store. Semantics are
/// atomic get/set/remove with last-write-wins; no ordering is guaranteed
/// across calls beyond that.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    async fn get(&self) -> Result<Option<String>, ClientError>;

    /// Persist a token, replacing any previous value
    async fn set(&self, token: &str) -> Result<(), ClientError>;

    /// Delete the stored token; deleting an absent token is not an error
    async fn remove(&self) -> Result<(), ClientError>;
}
