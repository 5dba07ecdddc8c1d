use serde::{Deserialize, Serialize};

/// Client-supplied key under which a cart lives (typically a session id).
/// The cart is created lazily the first time a key is seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartKey(String);

impl CartKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CartKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
