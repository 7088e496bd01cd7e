use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trimmed user shape the API nests inside a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewAuthor {
    pub id: u64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: u64,
    #[serde(rename = "autor")]
    pub author: ReviewAuthor,
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "texto")]
    pub text: String,
    pub rating: u8,
    #[serde(default)]
    pub spoiler: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for the review creation endpoint. Author and movie association are
/// implied by the credential and the URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewPayload {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "texto")]
    pub text: String,
    pub rating: u8,
    pub spoiler: bool,
}
