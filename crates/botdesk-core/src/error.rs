//! Error types for the botdesk-core crate.

use crate::clipboard::ClipboardError;
use botdesk_store::StoreError;

/// Core error type for repository and session operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Underlying store failed
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// User input rejected by a form. The message is shown inline, as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Message suitable for display next to the form.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Errors raised by the agent form controller.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Required field missing or malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The form was already submitted; open a fresh form to continue editing
    #[error("Form already submitted")]
    AlreadySubmitted,

    /// Copy requested before an embed snippet is shown
    #[error("No embed code to copy yet")]
    EmbedUnavailable,

    /// Host clipboard refused the copy
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Repository failure during submit
    #[error(transparent)]
    Core(#[from] CoreError),
}
