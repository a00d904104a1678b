use avatars::Gravatar;

use crate::domain::{ports::outbound::GravatarUrlSource, AvatarError};

/// Gravatar-backed implementation of [`GravatarUrlSource`].
pub struct GravatarUrls {
    client: Gravatar,
}

impl GravatarUrls {
    pub fn new(client: Gravatar) -> Self {
        Self { client }
    }
}

impl Default for GravatarUrls {
    fn default() -> Self {
        Self::new(Gravatar::default())
    }
}

impl GravatarUrlSource for GravatarUrls {
    fn avatar_url(&self, email: &str, size: u16) -> Result<String, AvatarError> {
        Ok(self.client.avatar_url(email, size))
    }
}
