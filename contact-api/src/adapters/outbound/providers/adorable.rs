use avatars::AdorableAvatars;
use uuid::Uuid;

use crate::domain::{ports::outbound::AdorableUrlSource, AvatarError};

/// Adorable Avatars-backed implementation of [`AdorableUrlSource`].
pub struct AdorableUrls {
    client: AdorableAvatars,
}

impl AdorableUrls {
    pub fn new(client: AdorableAvatars) -> Self {
        Self { client }
    }
}

impl Default for AdorableUrls {
    fn default() -> Self {
        Self::new(AdorableAvatars::default())
    }
}

impl AdorableUrlSource for AdorableUrls {
    fn avatar_url(&self, token: &Uuid, size: u16) -> Result<String, AvatarError> {
        Ok(self.client.avatar_url(&token.to_string(), size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_rendered_hyphenated() {
        let token = Uuid::parse_str("23d6b9f8-a2c0-4bbe-a30e-0e7ada812252").unwrap();
        let url = AdorableUrls::default().avatar_url(&token, 200).unwrap();
        assert_eq!(
            url,
            "https://api.adorable.io/avatars/200/23d6b9f8-a2c0-4bbe-a30e-0e7ada812252.png"
        );
    }
}
