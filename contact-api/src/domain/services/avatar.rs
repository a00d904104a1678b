use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    models::{AvatarRefresh, AvatarSource, Contact, ContactId},
    ports::{
        inbound::{AvatarService, RefreshAvatarsRequest},
        outbound::{AdorableUrlSource, ContactFieldLookup, ContactRepository, GravatarUrlSource},
    },
    AvatarError,
};

/// Refreshes a contact's avatars from both third-party providers.
///
/// Every refresh mints a fresh adorable token, rebuilds the adorable URL
/// from it and rebuilds the gravatar URL from the contact's email field.
/// A contact without an email loses its gravatar URL, and a stale
/// gravatar preference is demoted so `avatar_source` never points at a
/// URL that is no longer there.
pub struct AvatarServiceImpl<R, F, A, G> {
    contacts: Arc<R>,
    fields: Arc<F>,
    adorable: Arc<A>,
    gravatar: Arc<G>,
    avatar_size: u16,
}

impl<R, F, A, G> AvatarServiceImpl<R, F, A, G> {
    pub fn new(
        contacts: Arc<R>,
        fields: Arc<F>,
        adorable: Arc<A>,
        gravatar: Arc<G>,
        avatar_size: u16,
    ) -> Self {
        Self {
            contacts,
            fields,
            adorable,
            gravatar,
            avatar_size,
        }
    }
}

impl<R, F, A, G> AvatarServiceImpl<R, F, A, G>
where
    R: ContactRepository,
    F: ContactFieldLookup,
    A: AdorableUrlSource,
    G: GravatarUrlSource,
{
    fn validate(request: &RefreshAvatarsRequest) -> Result<ContactId, AvatarError> {
        match request.contact_id {
            None => Err(AvatarError::validation("contact_id is required")),
            Some(id) if id <= 0 => Err(AvatarError::validation(format!(
                "contact_id must be a positive integer, got {id}"
            ))),
            Some(id) => Ok(ContactId::new(id)),
        }
    }

    /// The gravatar URL and avatar source to store for this contact.
    async fn gravatar_decision(
        &self,
        contact: &Contact,
    ) -> Result<(Option<String>, AvatarSource), AvatarError> {
        match self.fields.email_field(&contact.id).await? {
            Some(field) => {
                let url = self.gravatar.avatar_url(&field.value, self.avatar_size)?;
                Ok((Some(url), contact.avatar_source))
            }
            None => {
                let source = if contact.avatar_source == AvatarSource::Gravatar {
                    tracing::info!(
                        contact_id = %contact.id,
                        "no email field, demoting avatar source to adorable"
                    );
                    AvatarSource::Adorable
                } else {
                    contact.avatar_source
                };
                Ok((None, source))
            }
        }
    }
}

#[async_trait]
impl<R, F, A, G> AvatarService for AvatarServiceImpl<R, F, A, G>
where
    R: ContactRepository,
    F: ContactFieldLookup,
    A: AdorableUrlSource,
    G: GravatarUrlSource,
{
    #[instrument(skip(self))]
    async fn refresh_from_internet(
        &self,
        request: RefreshAvatarsRequest,
    ) -> Result<Contact, AvatarError> {
        let contact_id = Self::validate(&request)?;

        let contact = self
            .contacts
            .find_contact(&contact_id)
            .await?
            .ok_or(AvatarError::ContactNotFound(contact_id))?;

        let token = Uuid::new_v4();
        let adorable_url = self.adorable.avatar_url(&token, self.avatar_size)?;

        let (gravatar_url, source) = self.gravatar_decision(&contact).await?;

        let refresh = AvatarRefresh {
            adorable_uuid: token,
            adorable_url,
            gravatar_url,
            source,
        };

        self.contacts
            .store_avatar_refresh(&contact_id, &refresh)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::adapters::outbound::memory::InMemoryContactStore;
    use crate::domain::models::{ContactField, ContactFieldId, ContactFieldKind};

    struct FakeAdorable;

    impl AdorableUrlSource for FakeAdorable {
        fn avatar_url(&self, token: &Uuid, size: u16) -> Result<String, AvatarError> {
            Ok(format!("https://adorable.test/avatars/{size}/{token}.png"))
        }
    }

    #[derive(Default)]
    struct RecordingGravatar {
        calls: Mutex<Vec<(String, u16)>>,
    }

    impl GravatarUrlSource for RecordingGravatar {
        fn avatar_url(&self, email: &str, size: u16) -> Result<String, AvatarError> {
            self.calls.lock().unwrap().push((email.to_string(), size));
            Ok(format!("https://gravatar.test/{email}?s={size}"))
        }
    }

    struct FailingGravatar;

    impl GravatarUrlSource for FailingGravatar {
        fn avatar_url(&self, _email: &str, _size: u16) -> Result<String, AvatarError> {
            Err(AvatarError::Provider("gravatar unreachable".to_string()))
        }
    }

    fn contact(id: i64, source: AvatarSource) -> Contact {
        Contact::new(ContactId::new(id), source)
    }

    fn email_field(id: i64, contact_id: i64, value: &str) -> ContactField {
        ContactField::new(
            ContactFieldId::new(id),
            ContactId::new(contact_id),
            ContactFieldKind::Email,
            value,
        )
    }

    fn service(
        store: &InMemoryContactStore,
        gravatar: Arc<RecordingGravatar>,
    ) -> AvatarServiceImpl<InMemoryContactStore, InMemoryContactStore, FakeAdorable, RecordingGravatar>
    {
        AvatarServiceImpl::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(FakeAdorable),
            gravatar,
            200,
        )
    }

    #[tokio::test]
    async fn refresh_mints_a_fresh_adorable_token() {
        let store = InMemoryContactStore::new().with_contacts(vec![Contact {
            avatar_adorable_uuid: Some(Uuid::new_v4()),
            ..contact(1, AvatarSource::Adorable)
        }]);
        let previous = store
            .contact(&ContactId::new(1))
            .unwrap()
            .avatar_adorable_uuid;

        let updated = service(&store, Arc::default())
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(1),
            })
            .await
            .unwrap();

        let token = updated.avatar_adorable_uuid.unwrap();
        assert_ne!(Some(token), previous);
        assert_eq!(
            updated.avatar_adorable_url.as_deref(),
            Some(format!("https://adorable.test/avatars/200/{token}.png").as_str())
        );
    }

    #[tokio::test]
    async fn gravatar_is_queried_exactly_once_with_the_contact_email() {
        let store = InMemoryContactStore::new()
            .with_contacts(vec![contact(1, AvatarSource::Adorable)])
            .with_fields(vec![email_field(10, 1, "a@example.com")]);
        let gravatar = Arc::new(RecordingGravatar::default());

        let updated = service(&store, Arc::clone(&gravatar))
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(
            *gravatar.calls.lock().unwrap(),
            vec![("a@example.com".to_string(), 200)]
        );
        assert_eq!(
            updated.avatar_gravatar_url.as_deref(),
            Some("https://gravatar.test/a@example.com?s=200")
        );
    }

    #[tokio::test]
    async fn lowest_field_id_wins_among_multiple_emails() {
        let store = InMemoryContactStore::new()
            .with_contacts(vec![contact(1, AvatarSource::Adorable)])
            .with_fields(vec![
                email_field(20, 1, "second@example.com"),
                email_field(10, 1, "first@example.com"),
            ]);
        let gravatar = Arc::new(RecordingGravatar::default());

        service(&store, Arc::clone(&gravatar))
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(
            *gravatar.calls.lock().unwrap(),
            vec![("first@example.com".to_string(), 200)]
        );
    }

    #[tokio::test]
    async fn missing_email_clears_gravatar_url_and_demotes_source() {
        let store = InMemoryContactStore::new().with_contacts(vec![Contact {
            avatar_gravatar_url: Some("https://gravatar.test/old?s=200".to_string()),
            ..contact(1, AvatarSource::Gravatar)
        }]);

        let updated = service(&store, Arc::default())
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(updated.avatar_gravatar_url, None);
        assert_eq!(updated.avatar_source, AvatarSource::Adorable);
        // The stored snapshot matches what the service returned.
        assert_eq!(store.contact(&ContactId::new(1)).unwrap(), updated);
    }

    #[tokio::test]
    async fn missing_email_keeps_a_non_gravatar_source() {
        let store = InMemoryContactStore::new().with_contacts(vec![contact(1, AvatarSource::Photo)]);

        let updated = service(&store, Arc::default())
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(updated.avatar_gravatar_url, None);
        assert_eq!(updated.avatar_source, AvatarSource::Photo);
    }

    #[tokio::test]
    async fn unknown_contact_fails_with_not_found() {
        let store = InMemoryContactStore::new();

        let err = service(&store, Arc::default())
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(999_999),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AvatarError::ContactNotFound(id) if id == ContactId::new(999_999)
        ));
    }

    #[tokio::test]
    async fn missing_contact_id_fails_validation() {
        let store = InMemoryContactStore::new();

        let err = service(&store, Arc::default())
            .refresh_from_internet(RefreshAvatarsRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AvatarError::Validation(_)));
    }

    #[tokio::test]
    async fn non_positive_contact_id_fails_validation() {
        let store = InMemoryContactStore::new();

        let err = service(&store, Arc::default())
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(0),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AvatarError::Validation(_)));
    }

    #[tokio::test]
    async fn real_providers_produce_their_documented_url_shapes() {
        use crate::adapters::outbound::providers::{AdorableUrls, GravatarUrls};

        let store = InMemoryContactStore::new()
            .with_contacts(vec![contact(1, AvatarSource::Adorable)])
            .with_fields(vec![email_field(10, 1, "a@example.com")]);

        let service = AvatarServiceImpl::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(AdorableUrls::default()),
            Arc::new(GravatarUrls::default()),
            200,
        );

        let updated = service
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(1),
            })
            .await
            .unwrap();

        let token = updated.avatar_adorable_uuid.unwrap();
        assert_eq!(
            updated.avatar_adorable_url.as_deref(),
            Some(format!("https://api.adorable.io/avatars/200/{token}.png").as_str())
        );
        assert_eq!(
            updated.avatar_gravatar_url.as_deref(),
            Some("https://secure.gravatar.com/avatar/b418773a2c51fb9777a1648346fa7394?s=200")
        );
    }

    #[tokio::test]
    async fn provider_failure_propagates_and_leaves_the_contact_untouched() {
        let seeded = Contact {
            avatar_gravatar_url: Some("https://gravatar.test/old?s=200".to_string()),
            ..contact(1, AvatarSource::Gravatar)
        };
        let store = InMemoryContactStore::new()
            .with_contacts(vec![seeded.clone()])
            .with_fields(vec![email_field(10, 1, "a@example.com")]);

        let service = AvatarServiceImpl::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(FakeAdorable),
            Arc::new(FailingGravatar),
            200,
        );

        let err = service
            .refresh_from_internet(RefreshAvatarsRequest {
                contact_id: Some(1),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AvatarError::Provider(_)));
        assert_eq!(store.contact(&ContactId::new(1)).unwrap(), seeded);
    }
}
