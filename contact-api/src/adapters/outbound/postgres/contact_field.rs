use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{
    models::{ContactField, ContactFieldId, ContactFieldKind, ContactId},
    ports::outbound::ContactFieldLookup,
    AvatarError,
};

pub struct PostgresContactFieldLookup {
    pool: PgPool,
}

impl PostgresContactFieldLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactFieldLookup for PostgresContactFieldLookup {
    async fn email_field(
        &self,
        contact_id: &ContactId,
    ) -> Result<Option<ContactField>, AvatarError> {
        // Lowest id wins so the lookup stays deterministic when a contact
        // carries several email fields.
        let row = sqlx::query(
            r#"
            SELECT id, contact_id, kind, value
            FROM contact_fields
            WHERE contact_id = $1 AND kind = $2
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(contact_id.as_i64())
        .bind(ContactFieldKind::Email.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| AvatarError::Storage(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row
            .try_get("id")
            .map_err(|err| AvatarError::Storage(err.to_string()))?;
        let contact_id: i64 = row
            .try_get("contact_id")
            .map_err(|err| AvatarError::Storage(err.to_string()))?;
        let kind: String = row
            .try_get("kind")
            .map_err(|err| AvatarError::Storage(err.to_string()))?;
        let value: String = row
            .try_get("value")
            .map_err(|err| AvatarError::Storage(err.to_string()))?;

        let kind = kind
            .parse::<ContactFieldKind>()
            .map_err(|_| AvatarError::Storage(format!("unknown contact field kind: {kind}")))?;

        Ok(Some(ContactField::new(
            ContactFieldId::new(id),
            ContactId::new(contact_id),
            kind,
            value,
        )))
    }
}
