use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued by the backend login and refresh
/// exchanges. The tokens are opaque to the client; expiry is learned through
/// 401 responses rather than tracked locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}
