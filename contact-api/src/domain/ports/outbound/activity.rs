use async_trait::async_trait;

use crate::domain::{
    models::{AccountId, Activity, ActivityId},
    ActivityError,
};

#[async_trait]
pub trait ActivityRepository: Send + Sync + 'static {
    /// Look up an activity scoped to its owning account.
    async fn find_activity(
        &self,
        account_id: &AccountId,
        activity_id: &ActivityId,
    ) -> Result<Option<Activity>, ActivityError>;

    /// Delete the activity; returns whether a row was removed.
    async fn delete_activity(
        &self,
        account_id: &AccountId,
        activity_id: &ActivityId,
    ) -> Result<bool, ActivityError>;
}
