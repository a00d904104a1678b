use async_trait::async_trait;

use crate::domain::{
    models::{AvatarRefresh, Contact, ContactId},
    AvatarError,
};

#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    async fn find_contact(&self, contact_id: &ContactId) -> Result<Option<Contact>, AvatarError>;

    /// Persist the outcome of one avatar resolution in a single
    /// transaction and return the updated snapshot.
    async fn store_avatar_refresh(
        &self,
        contact_id: &ContactId,
        refresh: &AvatarRefresh,
    ) -> Result<Contact, AvatarError>;
}
