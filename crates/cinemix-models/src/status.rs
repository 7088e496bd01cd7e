use serde::{Deserialize, Serialize};

/// Per-user markers for a single movie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MovieStatus {
    pub in_watchlist: bool,
    pub is_favorite: bool,
}
