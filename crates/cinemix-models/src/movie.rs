use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    pub slug: String,
}

/// Catalogue entry as served by the remote API. Read-only on this side.
///
/// The list endpoint omits `descricao`, `imdb_id` and the timestamps, so
/// everything past the card fields is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    pub slug: String,
    #[serde(rename = "ano_lancamento")]
    pub year: u32,
    #[serde(rename = "media_rating")]
    pub rating: f64,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(rename = "generos", default)]
    pub genres: Vec<Genre>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Orderings the list endpoint understands via its `ordering` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieOrdering {
    Popularity,
    ReleaseYear,
    Rating,
    Title,
}

impl MovieOrdering {
    /// Value sent on the wire. Leading `-` means descending.
    pub fn query_value(self) -> &'static str {
        match self {
            MovieOrdering::Popularity => "-popularidade",
            MovieOrdering::ReleaseYear => "-ano_lancamento",
            MovieOrdering::Rating => "-media_rating",
            MovieOrdering::Title => "titulo",
        }
    }
}
