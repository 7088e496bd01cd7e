//! Gateway tests against a mock remote API.

use cinemix_api::{ApiError, Gateway, RegisterPayload};
use cinemix_config::CredentialStore;
use cinemix_models::{MovieOrdering, ReviewPayload};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn movie_json(id: u64, slug: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "titulo": title,
        "slug": slug,
        "ano_lancamento": 1994,
        "media_rating": 8.7,
        "poster": "http://img.example/poster.jpg",
        "backdrop": null,
        "generos": [{"id": 1, "nome": "Drama", "slug": "drama"}]
    })
}

fn page_json(results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}

fn review_json(id: u64, author: &str, text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "autor": {"id": 7, "username": author},
        "titulo": null,
        "texto": text,
        "rating": 4,
        "spoiler": false,
        "created_at": "2026-01-15T10:00:00Z",
        "updated_at": "2026-01-15T10:00:00Z"
    })
}

#[tokio::test]
async fn test_unauthenticated_request_carries_no_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/filmes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::new(server.uri());
    gateway.list_movies(None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_stored_token_attached_to_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/filmes/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/filmes/casablanca/status/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"in_watchlist": true, "is_favorite": false})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "username": "rita", "email": "rita@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::with_token(server.uri(), Some("tok-123".to_string()));
    gateway.list_movies(None).await.unwrap();
    let status = gateway.movie_status("casablanca").await.unwrap();
    assert!(status.in_watchlist);
    assert!(!status.is_favorite);
    let user = gateway.me().await.unwrap();
    assert_eq!(user.username, "rita");
}

#[tokio::test]
async fn test_list_movies_sends_ordering() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/filmes/"))
        .and(query_param("ordering", "-popularidade"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![
            movie_json(1, "casablanca", "Casablanca"),
            movie_json(2, "chinatown", "Chinatown"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::new(server.uri());
    let page = gateway
        .list_movies(Some(MovieOrdering::Popularity))
        .await
        .unwrap();
    assert_eq!(page.count, 2);
    assert_eq!(page.results[0].title, "Casablanca");
    assert_eq!(page.results[0].genres[0].name, "Drama");
}

#[tokio::test]
async fn test_login_persists_tokens_and_uses_them() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let creds_path = dir.path().join("credentials.toml");

    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "fresh-access", "refresh": "fresh-refresh"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me/"))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "username": "rita", "email": "rita@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut credentials = CredentialStore::new(creds_path.clone());
    let mut gateway = Gateway::new(server.uri());
    assert!(!gateway.has_token());

    let tokens = gateway
        .login("rita", "Senha123!", &mut credentials)
        .await
        .unwrap();
    assert_eq!(tokens.access, "fresh-access");
    assert!(gateway.has_token());

    // The pair is durable: a fresh store sees both tokens.
    let mut reloaded = CredentialStore::new(creds_path);
    reloaded.load().unwrap();
    assert_eq!(reloaded.get_access_token(), Some(&"fresh-access".to_string()));
    assert_eq!(reloaded.get_refresh_token(), Some(&"fresh-refresh".to_string()));

    // And the in-memory token authorizes the profile fetch.
    gateway.me().await.unwrap();
}

#[tokio::test]
async fn test_failed_login_leaves_no_tokens() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut credentials = CredentialStore::new(dir.path().join("credentials.toml"));
    let mut gateway = Gateway::new(server.uri());
    let err = gateway
        .login("rita", "errada", &mut credentials)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
    assert!(!gateway.has_token());
    assert!(!credentials.has_access_token());
}

#[tokio::test]
async fn test_unknown_movie_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/filmes/nao-existe/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Não encontrado."})),
        )
        .mount(&server)
        .await;

    let gateway = Gateway::new(server.uri());
    let err = gateway.movie("nao-existe").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_register_surfaces_field_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "username": ["Já existe um utilizador com este nome."],
            "password": "Passwords não coincidem."
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(server.uri());
    let payload = RegisterPayload {
        username: "rita".to_string(),
        email: "rita@example.com".to_string(),
        password: "Senha123!".to_string(),
        password2: "Senha123?".to_string(),
    };
    let err = gateway.register(&payload).await.unwrap_err();
    match err {
        ApiError::Validation(fields) => {
            assert_eq!(
                fields.get("username").unwrap()[0],
                "Já existe um utilizador com este nome."
            );
            assert_eq!(fields.get("password").unwrap()[0], "Passwords não coincidem.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_toggles_parse_new_state() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/filmes/casablanca/toggle_watchlist/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"in_watchlist": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/filmes/casablanca/toggle_favorite/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"is_favorite": false})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::with_token(server.uri(), Some("tok".to_string()));
    assert!(gateway.toggle_watchlist("casablanca").await.unwrap());
    assert!(!gateway.toggle_favorite("casablanca").await.unwrap());
}

#[tokio::test]
async fn test_reviews_keep_remote_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/filmes/casablanca/reviews/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            review_json(2, "rita", "Mais recente."),
            review_json(1, "tiago", "Mais antiga."),
        ])))
        .mount(&server)
        .await;

    let gateway = Gateway::new(server.uri());
    let reviews = gateway.reviews("casablanca").await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, 2);
    assert_eq!(reviews[1].author.username, "tiago");
}

#[tokio::test]
async fn test_duplicate_review_surfaces_detail_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/filmes/casablanca/reviews/create/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Você já fez uma review para este filme."
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::with_token(server.uri(), Some("tok".to_string()));
    let payload = ReviewPayload {
        title: None,
        text: "Outra vez.".to_string(),
        rating: 5,
        spoiler: false,
    };
    let err = gateway.create_review("casablanca", &payload).await.unwrap_err();
    match err {
        ApiError::Status { message, .. } => {
            assert_eq!(message, "Você já fez uma review para este filme.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_me_without_credential_is_rejected_by_remote() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "As credenciais de autenticação não foram fornecidas."
        })))
        .mount(&server)
        .await;

    let gateway = Gateway::new(server.uri());
    let err = gateway.me().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
}

#[tokio::test]
async fn test_create_review_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/filmes/casablanca/reviews/create/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "autor": {"id": 7, "username": "rita"},
            "titulo": "Obrigatório",
            "texto": "Excelente.",
            "rating": 5,
            "spoiler": true,
            "created_at": "2026-02-01T20:30:00Z",
            "updated_at": "2026-02-01T20:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::with_token(server.uri(), Some("tok".to_string()));
    let payload = ReviewPayload {
        title: Some("Obrigatório".to_string()),
        text: "Excelente.".to_string(),
        rating: 5,
        spoiler: true,
    };
    let review = gateway.create_review("casablanca", &payload).await.unwrap();
    assert_eq!(review.id, 11);
    assert_eq!(review.rating, 5);
    assert!(review.spoiler);

    // Wire payload carries the remote field names.
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["titulo"], "Obrigatório");
    assert_eq!(body["texto"], "Excelente.");
    assert_eq!(body["rating"], 5);
    assert_eq!(body["spoiler"], true);
}
