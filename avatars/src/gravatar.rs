use crate::ProviderUrl;

const DEFAULT_BASE_URL: &str = "https://secure.gravatar.com";

/// Client for the Gravatar service.
///
/// Gravatar identifies accounts by the MD5 hash of the email address,
/// lowercased and stripped of surrounding whitespace.
#[derive(Debug, Clone)]
pub struct Gravatar {
    base_url: ProviderUrl,
}

impl Default for Gravatar {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Gravatar {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: ProviderUrl::new(base_url),
        }
    }

    /// URL of the avatar image for the given email address.
    ///
    /// Gravatar serves a default image when the email has no account, so
    /// the returned URL is always usable.
    pub fn avatar_url(&self, email: &str, size: u16) -> String {
        let hash = md5::compute(email.trim().to_lowercase().as_bytes());
        self.base_url
            .append_path(&format!("avatar/{hash:x}"))
            .with_query("s", size)
            .into_string()
    }
}
