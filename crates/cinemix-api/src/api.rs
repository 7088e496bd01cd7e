use cinemix_models::{Movie, MovieOrdering, MovieStatus, Paginated, Review, ReviewPayload, TokenPair, User};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Deserialize)]
struct WatchlistToggled {
    in_watchlist: bool,
}

#[derive(Debug, Deserialize)]
struct FavoriteToggled {
    is_favorite: bool,
}

/// Attach the stored access token, when present, as a bearer header. This
/// is the single credential-attachment point; requests without a token go
/// out unauthenticated and the remote decides.
fn bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
        None => builder,
    }
}

fn movie_url(base_url: &str, slug: &str, suffix: &str) -> String {
    format!(
        "{}/api/filmes/{}/{}",
        base_url,
        urlencoding::encode(slug),
        suffix
    )
}

pub async fn list_movies(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    ordering: Option<MovieOrdering>,
) -> Result<Paginated<Movie>, ApiError> {
    let url = format!("{}/api/filmes/", base_url);
    let mut request = bearer(client.get(&url), token);
    if let Some(ordering) = ordering {
        request = request.query(&[("ordering", ordering.query_value())]);
    }

    debug!(url = %url, "Fetching movie list");
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response("filmes", response).await);
    }
    Ok(response.json().await?)
}

pub async fn get_movie(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    slug: &str,
) -> Result<Movie, ApiError> {
    let url = movie_url(base_url, slug, "");
    let response = bearer(client.get(&url), token).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response(slug, response).await);
    }
    Ok(response.json().await?)
}

/// Exchange username/password for a token pair.
pub async fn obtain_token(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<TokenPair, ApiError> {
    let url = format!("{}/api/auth/token/", base_url);
    let response = client
        .post(&url)
        .json(&LoginRequest { username, password })
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response("token", response).await);
    }
    Ok(response.json().await?)
}

pub async fn register(
    client: &Client,
    base_url: &str,
    payload: &RegisterPayload,
) -> Result<User, ApiError> {
    let url = format!("{}/api/auth/register/", base_url);
    let response = client.post(&url).json(payload).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response("registo", response).await);
    }
    Ok(response.json().await?)
}

pub async fn me(client: &Client, base_url: &str, token: Option<&str>) -> Result<User, ApiError> {
    let url = format!("{}/api/auth/me/", base_url);
    let response = bearer(client.get(&url), token).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response("perfil", response).await);
    }
    Ok(response.json().await?)
}

pub async fn movie_status(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    slug: &str,
) -> Result<MovieStatus, ApiError> {
    let url = movie_url(base_url, slug, "status/");
    let response = bearer(client.get(&url), token).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response(slug, response).await);
    }
    Ok(response.json().await?)
}

/// Flip the watchlist marker; the response carries the new state.
pub async fn toggle_watchlist(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    slug: &str,
) -> Result<bool, ApiError> {
    let url = movie_url(base_url, slug, "toggle_watchlist/");
    let response = bearer(client.post(&url), token).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response(slug, response).await);
    }
    let toggled: WatchlistToggled = response.json().await?;
    Ok(toggled.in_watchlist)
}

/// Flip the favorite marker; the response carries the new state.
pub async fn toggle_favorite(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    slug: &str,
) -> Result<bool, ApiError> {
    let url = movie_url(base_url, slug, "toggle_favorite/");
    let response = bearer(client.post(&url), token).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response(slug, response).await);
    }
    let toggled: FavoriteToggled = response.json().await?;
    Ok(toggled.is_favorite)
}

pub async fn list_reviews(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    slug: &str,
) -> Result<Vec<Review>, ApiError> {
    let url = movie_url(base_url, slug, "reviews/");
    let response = bearer(client.get(&url), token).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response(slug, response).await);
    }
    Ok(response.json().await?)
}

pub async fn create_review(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    slug: &str,
    payload: &ReviewPayload,
) -> Result<Review, ApiError> {
    let url = movie_url(base_url, slug, "reviews/create/");
    let response = bearer(client.post(&url), token).json(payload).send().await?;
    if !response.status().is_success() {
        return Err(ApiError::from_response(slug, response).await);
    }
    Ok(response.json().await?)
}
