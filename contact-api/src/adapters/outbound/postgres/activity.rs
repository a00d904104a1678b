use async_trait::async_trait;
use sqlx::{PgPool, Row};
use time::Date;

use crate::domain::{
    models::{AccountId, Activity, ActivityId},
    ports::outbound::ActivityRepository,
    ActivityError,
};

pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn find_activity(
        &self,
        account_id: &AccountId,
        activity_id: &ActivityId,
    ) -> Result<Option<Activity>, ActivityError> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, summary, happened_at
            FROM activities
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(activity_id.as_i64())
        .bind(account_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ActivityError::Storage(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row
            .try_get("id")
            .map_err(|err| ActivityError::Storage(err.to_string()))?;
        let account_id: i64 = row
            .try_get("account_id")
            .map_err(|err| ActivityError::Storage(err.to_string()))?;
        let summary: String = row
            .try_get("summary")
            .map_err(|err| ActivityError::Storage(err.to_string()))?;
        let happened_at: Date = row
            .try_get("happened_at")
            .map_err(|err| ActivityError::Storage(err.to_string()))?;

        Ok(Some(Activity {
            id: ActivityId::new(id),
            account_id: AccountId::new(account_id),
            summary,
            happened_at,
        }))
    }

    async fn delete_activity(
        &self,
        account_id: &AccountId,
        activity_id: &ActivityId,
    ) -> Result<bool, ActivityError> {
        let result = sqlx::query(
            r#"
            DELETE FROM activities
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(activity_id.as_i64())
        .bind(account_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|err| ActivityError::Storage(err.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
