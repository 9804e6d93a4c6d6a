use axum::extract::Request;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::auth::require_basic_auth;
use crate::handlers::{delete_url_handler, health_handler, redirect_handler, save_url_handler};
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let protected = Router::new()
            .route("/save", post(save_url_handler))
            .route("/delete/{alias}", delete(delete_url_handler))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_basic_auth,
            ));

        let public = Router::new()
            .route("/health", get(health_handler))
            .route("/{alias}", get(redirect_handler));

        let layers = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CatchPanicLayer::new())
            .layer(TimeoutLayer::new(state.request_timeout()));

        Router::new()
            .merge(protected)
            .merge(public)
            .layer(layers)
            .with_state(state)
    }
}
