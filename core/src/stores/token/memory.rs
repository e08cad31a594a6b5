//! In-memory implementation of TokenStore

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::ClientError;

use super::r#trait::TokenStore;

/// Token store backed by process memory
///
/// Used for tests and for composition roots that do not have a platform
/// keychain available. The token does not survive a restart.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Result<Option<String>, ClientError> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> Result<(), ClientError> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<(), ClientError> {
        *self.token.write().await = None;
        Ok(())
    }
}
