use async_trait::async_trait;

use crate::domain::{
    models::{ContactField, ContactId},
    AvatarError,
};

#[async_trait]
pub trait ContactFieldLookup: Send + Sync + 'static {
    /// The contact's email field, if any.
    ///
    /// A contact can carry several email fields; the one with the lowest
    /// field id wins, so repeated lookups are deterministic.
    async fn email_field(
        &self,
        contact_id: &ContactId,
    ) -> Result<Option<ContactField>, AvatarError>;
}
