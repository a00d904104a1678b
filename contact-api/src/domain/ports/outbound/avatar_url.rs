use uuid::Uuid;

use crate::domain::AvatarError;

/// Builds image URLs for the token-keyed avatar provider.
pub trait AdorableUrlSource: Send + Sync + 'static {
    fn avatar_url(&self, token: &Uuid, size: u16) -> Result<String, AvatarError>;
}

/// Builds image URLs for the email-keyed avatar provider.
pub trait GravatarUrlSource: Send + Sync + 'static {
    fn avatar_url(&self, email: &str, size: u16) -> Result<String, AvatarError>;
}
