//! Message body used for confirmations and every error response.

use serde::{Deserialize, Serialize};

pub const POST_NOT_FOUND: &str = "Post not found.";
pub const POST_DELETED: &str = "Post deleted successfully.";

/// `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(POST_NOT_FOUND)
    }

    pub fn deleted() -> Self {
        Self::new(POST_DELETED)
    }
}
