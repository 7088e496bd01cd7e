use serde::{Deserialize, Serialize};

/// Authenticated user profile.
///
/// Review authors arrive as a trimmed variant without `email`, hence the
/// default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}
