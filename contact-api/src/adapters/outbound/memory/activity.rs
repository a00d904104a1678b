use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{
    models::{AccountId, Activity, ActivityId},
    ports::outbound::ActivityRepository,
    ActivityError,
};

/// In-memory activity repository keyed by `(account, activity)`.
#[derive(Clone, Default)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<HashMap<(AccountId, ActivityId), Activity>>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add initial activities to the repository.
    pub fn with_activities(self, activities: Vec<Activity>) -> Self {
        {
            let mut stored = self.activities.write().unwrap();
            for activity in activities {
                stored.insert((activity.account_id, activity.id), activity);
            }
        }
        self
    }

    /// Whether the activity is still present (for test assertions).
    pub fn contains(&self, account_id: &AccountId, activity_id: &ActivityId) -> bool {
        self.activities
            .read()
            .unwrap()
            .contains_key(&(*account_id, *activity_id))
    }

    /// Get the current number of activities.
    pub fn len(&self) -> usize {
        self.activities.read().unwrap().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.activities.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_activity(
        &self,
        account_id: &AccountId,
        activity_id: &ActivityId,
    ) -> Result<Option<Activity>, ActivityError> {
        Ok(self
            .activities
            .read()
            .unwrap()
            .get(&(*account_id, *activity_id))
            .cloned())
    }

    async fn delete_activity(
        &self,
        account_id: &AccountId,
        activity_id: &ActivityId,
    ) -> Result<bool, ActivityError> {
        Ok(self
            .activities
            .write()
            .unwrap()
            .remove(&(*account_id, *activity_id))
            .is_some())
    }
}
