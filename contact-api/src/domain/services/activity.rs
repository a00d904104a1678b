use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::{
    models::{AccountId, ActivityId},
    ports::{
        inbound::{ActivityService, DestroyActivityRequest},
        outbound::ActivityRepository,
    },
    ActivityError,
};

/// Deletes activities, scoped to the account that owns them.
pub struct ActivityServiceImpl<R> {
    activities: Arc<R>,
}

impl<R> ActivityServiceImpl<R> {
    pub fn new(activities: Arc<R>) -> Self {
        Self { activities }
    }
}

impl<R: ActivityRepository> ActivityServiceImpl<R> {
    fn validate(request: &DestroyActivityRequest) -> Result<(AccountId, ActivityId), ActivityError> {
        let account_id = match request.account_id {
            None => return Err(ActivityError::validation("account_id is required")),
            Some(id) if id <= 0 => {
                return Err(ActivityError::validation(format!(
                    "account_id must be a positive integer, got {id}"
                )))
            }
            Some(id) => AccountId::new(id),
        };

        let activity_id = match request.activity_id {
            None => return Err(ActivityError::validation("activity_id is required")),
            Some(id) if id <= 0 => {
                return Err(ActivityError::validation(format!(
                    "activity_id must be a positive integer, got {id}"
                )))
            }
            Some(id) => ActivityId::new(id),
        };

        Ok((account_id, activity_id))
    }
}

#[async_trait]
impl<R: ActivityRepository> ActivityService for ActivityServiceImpl<R> {
    #[instrument(skip(self))]
    async fn destroy_activity(
        &self,
        request: DestroyActivityRequest,
    ) -> Result<(), ActivityError> {
        let (account_id, activity_id) = Self::validate(&request)?;

        self.activities
            .find_activity(&account_id, &activity_id)
            .await?
            .ok_or(ActivityError::ActivityNotFound(activity_id))?;

        let deleted = self
            .activities
            .delete_activity(&account_id, &activity_id)
            .await?;
        if !deleted {
            // Row vanished between the lookup and the delete.
            return Err(ActivityError::ActivityNotFound(activity_id));
        }

        Ok(())
    }
}
