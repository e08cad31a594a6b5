//! Generic API response shapes

use serde::{Deserialize, Serialize};

/// Response body for endpoints that acknowledge with a plain message
/// (sign-up, logout, profile updates)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
