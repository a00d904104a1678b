use async_trait::async_trait;

use crate::domain::ActivityError;

/// Input for an activity deletion, as received from the calling layer.
#[derive(Debug, Clone, Default)]
pub struct DestroyActivityRequest {
    pub account_id: Option<i64>,
    pub activity_id: Option<i64>,
}

#[async_trait]
pub trait ActivityService: Send + Sync + 'static {
    /// Delete an activity belonging to the given account.
    async fn destroy_activity(&self, request: DestroyActivityRequest)
        -> Result<(), ActivityError>;
}
