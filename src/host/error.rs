//! Errors raised by host capability calls.

use thiserror::Error;

use crate::base::DocumentId;

use super::Capability;

/// Failure of a single host call. Command handlers log and swallow these.
#[derive(Debug, Error)]
pub enum HostError {
    /// A provider or UI capability failed.
    #[error("{capability} failed: {message}")]
    Provider {
        capability: Capability,
        message: String,
    },

    /// The host has no document with this id.
    #[error("Unknown document: {0}")]
    UnknownDocument(DocumentId),

    /// No command is registered under this name.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A workspace edit could not be applied.
    #[error("Edit rejected: {0}")]
    Edit(String),
}

impl HostError {
    /// Create a provider failure for `capability`.
    pub fn provider(capability: Capability, message: impl Into<String>) -> Self {
        Self::Provider {
            capability,
            message: message.into(),
        }
    }

    /// Create an edit failure.
    pub fn edit(message: impl Into<String>) -> Self {
        Self::Edit(message.into())
    }
}
