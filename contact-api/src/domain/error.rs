use thiserror::Error;

use super::models::{ActivityId, ContactId};

/// Errors that can occur while resolving avatars for a contact.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("{0}")]
    Validation(String),
    #[error("contact not found: {0}")]
    ContactNotFound(ContactId),
    #[error("avatar provider error: {0}")]
    Provider(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl AvatarError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Errors that can occur during activity maintenance operations.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("{0}")]
    Validation(String),
    #[error("activity not found: {0}")]
    ActivityNotFound(ActivityId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ActivityError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
