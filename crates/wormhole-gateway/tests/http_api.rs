use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wormhole_core::{Alias, WriteRepository};
use wormhole_gateway::{App, AppState, Credentials};
use wormhole_generator::RandomGenerator;
use wormhole_shortener::{RetryPolicy, ShortenerService};
use wormhole_storage::InMemoryRepository;

struct Fixture {
    repository: Arc<InMemoryRepository>,
    router: Router,
}

impl Fixture {
    fn new() -> Self {
        Self::with_state(|state| state)
    }

    fn with_state(configure: impl FnOnce(AppState) -> AppState) -> Self {
        let repository = Arc::new(InMemoryRepository::new());
        let service = ShortenerService::from_shared(
            Arc::clone(&repository),
            RandomGenerator::default(),
            RetryPolicy::default(),
        );
        let state = configure(AppState::new(Arc::new(service)));

        Self {
            repository,
            router: App::router(state),
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

fn save_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/save")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete_request(alias: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/delete/{alias}"))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let fixture = Fixture::new();

    let response = fixture.send(get_request("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn save_redirect_delete_happy_path() {
    let fixture = Fixture::new();

    let response = fixture
        .send(save_request(json!({ "url": "https://example.com" })))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "OK");
    let alias = body["alias"].as_str().unwrap().to_string();
    assert_eq!(alias.len(), 6);

    let response = fixture.send(get_request(&format!("/{alias}"))).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/"
    );

    let response = fixture.send(delete_request(&alias)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "OK" }));

    let response = fixture.send(get_request(&format!("/{alias}"))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["status"], "Error");
    assert_eq!(body["error"], "url not found");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let fixture = Fixture::new();

    let response = fixture.send(get_request("/health")).await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn custom_alias_is_kept() {
    let fixture = Fixture::new();

    let response = fixture
        .send(save_request(json!({ "url": "https://a.com", "alias": "mine" })))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["alias"], "mine");
}

#[tokio::test]
async fn duplicate_alias_conflicts_and_keeps_original() {
    let fixture = Fixture::new();

    fixture
        .send(save_request(json!({ "url": "https://a.com", "alias": "x" })))
        .await;
    let response = fixture
        .send(save_request(json!({ "url": "https://b.com", "alias": "x" })))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(response).await["error"], "alias already exists");

    let response = fixture.send(get_request("/x")).await;
    assert_eq!(response.headers()[header::LOCATION], "https://a.com/");
}

#[tokio::test]
async fn invalid_url_is_rejected_without_a_record() {
    let fixture = Fixture::new();

    let response = fixture
        .send(save_request(json!({ "url": "not-a-url" })))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], "Error");
    assert!(fixture.repository.is_empty());
}

#[tokio::test]
async fn path_unsafe_alias_is_rejected() {
    let fixture = Fixture::new();

    let response = fixture
        .send(save_request(json!({ "url": "https://a.com", "alias": "a/b" })))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(fixture.repository.is_empty());
}

#[tokio::test]
async fn malformed_body_gets_json_error() {
    let fixture = Fixture::new();

    let request = Request::builder()
        .method("POST")
        .uri("/save")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{"))
        .unwrap();
    let response = fixture.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], "Error");
}

#[tokio::test]
async fn delete_unknown_alias_is_not_found() {
    let fixture = Fixture::new();

    let response = fixture.send(delete_request("missing")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_stored_target_is_a_server_error() {
    let fixture = Fixture::new();
    fixture
        .repository
        .insert(&Alias::new_unchecked("broken"), "http://[::1")
        .await
        .unwrap();

    let response = fixture.send(get_request("/broken")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await["error"],
        "internal server error - malformed redirect URL"
    );
}

#[tokio::test]
async fn cancelled_server_stops_saves() {
    let shutdown = tokio_util::sync::CancellationToken::new();
    shutdown.cancel();
    let fixture = Fixture::with_state(|state| state.with_shutdown(shutdown));

    let response = fixture
        .send(save_request(json!({ "url": "https://a.com" })))
        .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(fixture.repository.is_empty());
}

#[tokio::test]
async fn basic_auth_guards_mutations_only() {
    let credentials = Credentials::new("us", "pass");
    let fixture = Fixture::with_state(|state| state.with_credentials(credentials.clone()));

    let response = fixture
        .send(save_request(json!({ "url": "https://a.com", "alias": "guarded" })))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(fixture.repository.is_empty());

    let mut request = save_request(json!({ "url": "https://a.com", "alias": "guarded" }));
    request.headers_mut().insert(
        header::AUTHORIZATION,
        credentials.to_header_value().parse().unwrap(),
    );
    let response = fixture.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = fixture.send(get_request("/guarded")).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let response = fixture.send(delete_request("guarded")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
