use serde::{Deserialize, Serialize};

/// Login/registration payload. Every field is optional on the wire so that a
/// token-less success can be detected instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl TokenData {
    pub fn bearer(token: &str) -> Self {
        Self {
            access_token: Some(token.to_string()),
            token_type: Some(String::from("bearer")),
            expires_in: None,
        }
    }

    /// The access token, if present and non-blank
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}
