use async_trait::async_trait;

use crate::domain::{models::Contact, AvatarError};

/// Input for an avatar refresh, as received from the calling layer.
///
/// `contact_id` stays optional so that missing input surfaces as
/// [`AvatarError::Validation`] rather than a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct RefreshAvatarsRequest {
    pub contact_id: Option<i64>,
}

#[async_trait]
pub trait AvatarService: Send + Sync + 'static {
    /// Fetch fresh avatar URLs for a contact from both providers and
    /// persist the outcome.
    async fn refresh_from_internet(
        &self,
        request: RefreshAvatarsRequest,
    ) -> Result<Contact, AvatarError>;
}
