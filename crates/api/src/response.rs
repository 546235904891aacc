//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` body for operations with nothing else to return,
/// such as deletions and cancellations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
