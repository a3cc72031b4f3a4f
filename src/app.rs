//! Application state and HTTP router construction.
//!
//! The GraphQL handler attaches two pieces of request data before
//! execution: the acting user (from the `x-actor-id` header) and the
//! per-request backend loader.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::backend::{BackendClient, request_loader};
use crate::config::Config;
use crate::graphql::{Actor, GatewaySchema};

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<BackendClient>,
    pub schema: GatewaySchema,
}

/// Build the full Axum router: /graphql, /health, layers.
pub fn build_app(state: AppState) -> Router<()> {
    let request_timeout = state.config.request_timeout;
    Router::new()
        .route("/health", get(health))
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        // Per-request deadline: dropping the handler future cancels any
        // in-flight backend calls on that request.
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Extract the acting user from the `x-actor-id` header.
fn extract_actor(headers: &HeaderMap) -> Option<Actor> {
    headers
        .get("x-actor-id")?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|user_id| Actor { user_id })
}

/// GraphQL query/mutation handler with actor context and request loader
async fn graphql_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    request = request.data(request_loader(state.client.clone()));

    if let Some(actor) = extract_actor(&headers) {
        request = request.data(actor);
    }

    state.schema.execute(request).await.into()
}

/// GraphiQL interactive playground (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response()
    } else {
        (
            axum::http::StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}

/// Health probe for the gateway process itself
async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
