use crate::ProviderUrl;

const DEFAULT_BASE_URL: &str = "https://api.adorable.io";

/// Client for the Adorable Avatars service.
///
/// The service renders a `size` x `size` PNG deterministically from an
/// opaque token, so the same token always yields the same image.
#[derive(Debug, Clone)]
pub struct AdorableAvatars {
    base_url: ProviderUrl,
}

impl Default for AdorableAvatars {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AdorableAvatars {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: ProviderUrl::new(base_url),
        }
    }

    /// URL of the avatar image for the given token.
    pub fn avatar_url(&self, token: &str, size: u16) -> String {
        self.base_url
            .append_path(&format!("avatars/{size}/{token}.png"))
            .into_string()
    }
}
