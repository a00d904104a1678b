use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::{
    models::{AvatarRefresh, AvatarSource, Contact, ContactId},
    ports::outbound::ContactRepository,
    AvatarError,
};

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn contact_from_row(row: &PgRow) -> Result<Contact, AvatarError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|err| AvatarError::Storage(err.to_string()))?;
    let avatar_adorable_uuid: Option<Uuid> = row
        .try_get("avatar_adorable_uuid")
        .map_err(|err| AvatarError::Storage(err.to_string()))?;
    let avatar_adorable_url: Option<String> = row
        .try_get("avatar_adorable_url")
        .map_err(|err| AvatarError::Storage(err.to_string()))?;
    let avatar_gravatar_url: Option<String> = row
        .try_get("avatar_gravatar_url")
        .map_err(|err| AvatarError::Storage(err.to_string()))?;
    let source: String = row
        .try_get("avatar_source")
        .map_err(|err| AvatarError::Storage(err.to_string()))?;

    let avatar_source = source
        .parse::<AvatarSource>()
        .map_err(|_| AvatarError::Storage(format!("unknown avatar_source value: {source}")))?;

    Ok(Contact {
        id: ContactId::new(id),
        avatar_adorable_uuid,
        avatar_adorable_url,
        avatar_gravatar_url,
        avatar_source,
    })
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn find_contact(&self, contact_id: &ContactId) -> Result<Option<Contact>, AvatarError> {
        let row = sqlx::query(
            r#"
            SELECT id, avatar_adorable_uuid, avatar_adorable_url, avatar_gravatar_url, avatar_source
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(contact_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| AvatarError::Storage(err.to_string()))?;

        row.as_ref().map(contact_from_row).transpose()
    }

    async fn store_avatar_refresh(
        &self,
        contact_id: &ContactId,
        refresh: &AvatarRefresh,
    ) -> Result<Contact, AvatarError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| AvatarError::Storage(err.to_string()))?;

        let row = sqlx::query(
            r#"
            UPDATE contacts
            SET avatar_adorable_uuid = $2,
                avatar_adorable_url = $3,
                avatar_gravatar_url = $4,
                avatar_source = $5
            WHERE id = $1
            RETURNING id, avatar_adorable_uuid, avatar_adorable_url, avatar_gravatar_url, avatar_source
            "#,
        )
        .bind(contact_id.as_i64())
        .bind(refresh.adorable_uuid)
        .bind(&refresh.adorable_url)
        .bind(refresh.gravatar_url.as_deref())
        .bind(refresh.source.to_string())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| AvatarError::Storage(err.to_string()))?;

        let contact = row
            .as_ref()
            .map(contact_from_row)
            .transpose()?
            .ok_or(AvatarError::ContactNotFound(*contact_id))?;

        tx.commit()
            .await
            .map_err(|err| AvatarError::Storage(err.to_string()))?;

        Ok(contact)
    }
}
