use std::fmt;

/// Base URL of an avatar provider, with slash-tolerant path building.
#[derive(Debug, Clone)]
pub struct ProviderUrl(String);

impl AsRef<str> for ProviderUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ProviderUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into().trim_end_matches('/').to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    pub fn with_query(&self, key: &str, value: impl fmt::Display) -> Self {
        if self.0.contains('?') {
            Self(format!("{}&{}={}", self.0, key, value))
        } else {
            Self(format!("{}?{}={}", self.0, key, value))
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
