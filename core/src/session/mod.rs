//! Session state
//!
//! Owns the signed-in state of the application: the access token mirror, the
//! cached identity, and the logout path. The HTTP client only sees the
//! [`Session`] trait so an irrecoverable auth failure can clear everything
//! without the client knowing what a session contains.

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::domain::entities::user::User;
use crate::errors::ClientError;
use crate::stores::token::TokenStore;

/// Collaborator notified when authentication is irrecoverably lost
///
/// `clear` must remove the stored token and any cached identity state. It is
/// deliberately infallible: a failed refresh already signs the user out, and
/// there is nothing useful a caller could do with a clear-time error.
#[async_trait]
pub trait Session: Send + Sync {
    async fn clear(&self);
}

#[derive(Default)]
struct SessionState {
    access_token: Option<String>,
    is_authenticated: bool,
    user: Option<User>,
}

/// Application session backed by a token store
///
/// Construction leaves the session signed out; [`AuthSession::initialize`]
/// loads any persisted token on app start.
pub struct AuthSession {
    token_store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
}

impl AuthSession {
    /// Create a signed-out session over the given token store
    pub fn new(token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            token_store,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Load the persisted token, if any
    ///
    /// A storage failure leaves the session signed out rather than failing
    /// app startup.
    pub async fn initialize(&self) {
        match self.token_store.get().await {
            Ok(Some(token)) => {
                let mut state = self.state.write().await;
                state.access_token = Some(token);
                state.is_authenticated = true;
            }
            Ok(None) => {
                debug!("no persisted token, starting signed out");
            }
            Err(err) => {
                error!("failed to read persisted token: {err}");
            }
        }
    }

    /// Persist a freshly issued token and mark the session authenticated
    pub async fn set_token(&self, token: &str) -> Result<(), ClientError> {
        self.token_store.set(token).await?;
        let mut state = self.state.write().await;
        state.access_token = Some(token.to_string());
        state.is_authenticated = true;
        Ok(())
    }

    /// Cache the signed-in user's identity
    pub async fn set_user(&self, user: User) {
        self.state.write().await.user = Some(user);
    }

    /// The cached identity, if one was set
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Whether the session currently holds a token
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    /// The in-memory token mirror
    pub async fn access_token(&self) -> Option<String> {
        self.state.read().await.access_token.clone()
    }

    /// Sign out: delete the stored token and drop all cached state
    ///
    /// Storage failures are logged; the in-memory state is cleared
    /// regardless so the UI always returns to the sign-in screen.
    pub async fn logout(&self) {
        if let Err(err) = self.token_store.remove().await {
            error!("failed to remove stored token during logout: {err}");
        }
        let mut state = self.state.write().await;
        state.access_token = None;
        state.is_authenticated = false;
        state.user = None;
    }
}

#[async_trait]
impl Session for AuthSession {
    async fn clear(&self) {
        self.logout().await;
    }
}
