use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{
    models::{AvatarRefresh, Contact, ContactField, ContactFieldKind, ContactId},
    ports::outbound::{ContactFieldLookup, ContactRepository},
    AvatarError,
};

/// In-memory contact store implementing both the repository and the
/// field lookup.
///
/// # Examples
///
/// ```ignore
/// let store = InMemoryContactStore::new()
///     .with_contacts(vec![contact])
///     .with_fields(vec![email_field]);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryContactStore {
    contacts: Arc<RwLock<HashMap<ContactId, Contact>>>,
    fields: Arc<RwLock<Vec<ContactField>>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add initial contacts to the store.
    pub fn with_contacts(self, contacts: Vec<Contact>) -> Self {
        {
            let mut stored = self.contacts.write().unwrap();
            for contact in contacts {
                stored.insert(contact.id, contact);
            }
        }
        self
    }

    /// Add initial contact fields to the store.
    pub fn with_fields(self, fields: Vec<ContactField>) -> Self {
        self.fields.write().unwrap().extend(fields);
        self
    }

    /// Get a contact snapshot (for test assertions).
    pub fn contact(&self, contact_id: &ContactId) -> Option<Contact> {
        self.contacts.read().unwrap().get(contact_id).cloned()
    }

    /// Get the current number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.read().unwrap().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactStore {
    async fn find_contact(&self, contact_id: &ContactId) -> Result<Option<Contact>, AvatarError> {
        Ok(self.contacts.read().unwrap().get(contact_id).cloned())
    }

    async fn store_avatar_refresh(
        &self,
        contact_id: &ContactId,
        refresh: &AvatarRefresh,
    ) -> Result<Contact, AvatarError> {
        let mut contacts = self.contacts.write().unwrap();
        let contact = contacts
            .get_mut(contact_id)
            .ok_or(AvatarError::ContactNotFound(*contact_id))?;

        *contact = contact.with_refresh(refresh);
        Ok(contact.clone())
    }
}

#[async_trait]
impl ContactFieldLookup for InMemoryContactStore {
    async fn email_field(
        &self,
        contact_id: &ContactId,
    ) -> Result<Option<ContactField>, AvatarError> {
        let fields = self.fields.read().unwrap();
        Ok(fields
            .iter()
            .filter(|field| {
                field.contact_id == *contact_id && field.kind == ContactFieldKind::Email
            })
            .min_by_key(|field| field.id.as_i64())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AvatarSource, ContactFieldId};

    fn field(id: i64, contact_id: i64, kind: ContactFieldKind, value: &str) -> ContactField {
        ContactField::new(
            ContactFieldId::new(id),
            ContactId::new(contact_id),
            kind,
            value,
        )
    }

    #[tokio::test]
    async fn email_lookup_ignores_other_kinds_and_other_contacts() {
        let store = InMemoryContactStore::new().with_fields(vec![
            field(1, 1, ContactFieldKind::Phone, "+4670000000"),
            field(2, 2, ContactFieldKind::Email, "other@example.com"),
            field(3, 1, ContactFieldKind::Email, "mine@example.com"),
        ]);

        let found = store.email_field(&ContactId::new(1)).await.unwrap();
        assert_eq!(found.unwrap().value, "mine@example.com");
    }

    #[tokio::test]
    async fn email_lookup_prefers_the_lowest_field_id() {
        let store = InMemoryContactStore::new().with_fields(vec![
            field(7, 1, ContactFieldKind::Email, "later@example.com"),
            field(3, 1, ContactFieldKind::Email, "earlier@example.com"),
        ]);

        let found = store.email_field(&ContactId::new(1)).await.unwrap();
        assert_eq!(found.unwrap().id.as_i64(), 3);
    }

    #[tokio::test]
    async fn storing_a_refresh_for_a_missing_contact_fails() {
        let store = InMemoryContactStore::new();
        let refresh = AvatarRefresh {
            adorable_uuid: uuid::Uuid::new_v4(),
            adorable_url: "https://adorable.test/a.png".to_string(),
            gravatar_url: None,
            source: AvatarSource::Adorable,
        };

        let err = store
            .store_avatar_refresh(&ContactId::new(42), &refresh)
            .await
            .unwrap_err();
        assert!(matches!(err, AvatarError::ContactNotFound(_)));
    }
}
