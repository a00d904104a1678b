use serde::Serialize;
use time::Date;

use super::{AccountId, ActivityId};

/// An activity logged against an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: ActivityId,
    pub account_id: AccountId,
    pub summary: String,
    pub happened_at: Date,
}
