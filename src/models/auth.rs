use std::fmt;

use serde::{Deserialize, Serialize};

/// Response body of `/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
    pub hash: String,
}

/// API key plus the session hash handed out by `/login`.
///
/// The library keeps no session state; callers pass these back into
/// authenticated operations such as [`get_sets`](crate::BricksetClient::get_sets).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub hash: Option<String>,
}

impl Credentials {
    /// Credentials for calls that only need an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            hash: None,
        }
    }

    /// The session hash, or `""` when not logged in (anonymous `userHash`).
    pub fn user_hash(&self) -> &str {
        self.hash.as_deref().unwrap_or("")
    }

    pub fn is_authenticated(&self) -> bool {
        self.hash.is_some()
    }
}

impl From<(&str, LoginResponse)> for Credentials {
    fn from((api_key, response): (&str, LoginResponse)) -> Self {
        Self {
            api_key: api_key.to_string(),
            hash: Some(response.hash).filter(|h| !h.is_empty()),
        }
    }
}

// Keep secrets out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("hash", &self.hash.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
