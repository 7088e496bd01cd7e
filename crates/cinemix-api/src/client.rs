use cinemix_config::CredentialStore;
use cinemix_models::{Movie, MovieOrdering, MovieStatus, Paginated, Review, ReviewPayload, TokenPair, User};
use reqwest::Client;
use tracing::info;

use crate::api::{self, RegisterPayload};
use crate::error::ApiError;

fn create_client() -> Client {
    Client::builder()
        .user_agent(concat!("cinemix/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// The single point of contact with the remote API.
///
/// Holds one HTTP client, the base address resolved at construction, and
/// the access token hydrated from the credential store. Every operation
/// re-fetches; nothing is cached here. The token travels as an explicit
/// per-request header, never as mutated client-wide default state.
#[derive(Clone)]
pub struct Gateway {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_token(base_url, None)
    }

    pub fn with_token(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: create_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Construct with whatever access token durable storage currently has.
    pub fn from_credentials(base_url: impl Into<String>, credentials: &CredentialStore) -> Self {
        Self::with_token(base_url, credentials.get_access_token().cloned())
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub async fn list_movies(
        &self,
        ordering: Option<MovieOrdering>,
    ) -> Result<Paginated<Movie>, ApiError> {
        api::list_movies(&self.http, &self.base_url, self.token(), ordering).await
    }

    pub async fn movie(&self, slug: &str) -> Result<Movie, ApiError> {
        api::get_movie(&self.http, &self.base_url, self.token(), slug).await
    }

    /// Obtain a token pair and make it durable. On success both tokens are
    /// written through the credential store and the access token stays on
    /// this gateway for the remainder of the session.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        credentials: &mut CredentialStore,
    ) -> Result<TokenPair, ApiError> {
        let tokens = api::obtain_token(&self.http, &self.base_url, username, password).await?;

        credentials.set_access_token(tokens.access.clone());
        credentials.set_refresh_token(tokens.refresh.clone());
        credentials
            .save()
            .map_err(|err| ApiError::Storage(err.to_string()))?;

        self.access_token = Some(tokens.access.clone());
        info!("Obtained access token for {}", username);
        Ok(tokens)
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<User, ApiError> {
        api::register(&self.http, &self.base_url, payload).await
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        api::me(&self.http, &self.base_url, self.token()).await
    }

    pub async fn movie_status(&self, slug: &str) -> Result<MovieStatus, ApiError> {
        api::movie_status(&self.http, &self.base_url, self.token(), slug).await
    }

    pub async fn toggle_watchlist(&self, slug: &str) -> Result<bool, ApiError> {
        api::toggle_watchlist(&self.http, &self.base_url, self.token(), slug).await
    }

    pub async fn toggle_favorite(&self, slug: &str) -> Result<bool, ApiError> {
        api::toggle_favorite(&self.http, &self.base_url, self.token(), slug).await
    }

    pub async fn reviews(&self, slug: &str) -> Result<Vec<Review>, ApiError> {
        api::list_reviews(&self.http, &self.base_url, self.token(), slug).await
    }

    pub async fn create_review(
        &self,
        slug: &str,
        payload: &ReviewPayload,
    ) -> Result<Review, ApiError> {
        api::create_review(&self.http, &self.base_url, self.token(), slug, payload).await
    }
}
