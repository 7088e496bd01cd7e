use serde::{Deserialize, Serialize};

/// Token pair issued by the authentication endpoint. Both are opaque
/// strings; the access token authorizes requests, the refresh token is
/// stored for a future rotation scheme but never exchanged by this client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}
