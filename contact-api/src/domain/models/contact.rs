use serde::Serialize;
use strum::{Display, EnumString};
use uuid::Uuid;

use super::ContactId;

/// Which provider's URL the presentation layer should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AvatarSource {
    Default,
    Adorable,
    Gravatar,
    Photo,
}

/// Snapshot of a contact's avatar state.
///
/// Snapshots are immutable; services build an [`AvatarRefresh`] and hand
/// it to the repository, which returns the updated snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub avatar_adorable_uuid: Option<Uuid>,
    pub avatar_adorable_url: Option<String>,
    pub avatar_gravatar_url: Option<String>,
    pub avatar_source: AvatarSource,
}

impl Contact {
    pub fn new(id: ContactId, avatar_source: AvatarSource) -> Self {
        Self {
            id,
            avatar_adorable_uuid: None,
            avatar_adorable_url: None,
            avatar_gravatar_url: None,
            avatar_source,
        }
    }

    /// The snapshot after applying a refresh.
    pub fn with_refresh(&self, refresh: &AvatarRefresh) -> Self {
        Self {
            id: self.id,
            avatar_adorable_uuid: Some(refresh.adorable_uuid),
            avatar_adorable_url: Some(refresh.adorable_url.clone()),
            avatar_gravatar_url: refresh.gravatar_url.clone(),
            avatar_source: refresh.source,
        }
    }
}

/// The full outcome of one avatar resolution.
///
/// Applied by the repository as a single write, so a contact never ends
/// up with a token from one resolution and URLs from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRefresh {
    pub adorable_uuid: Uuid,
    pub adorable_url: String,
    pub gravatar_url: Option<String>,
    pub source: AvatarSource,
}
