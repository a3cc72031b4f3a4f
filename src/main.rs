//! Trellis - GraphQL gateway over a flat REST backend
//!
//! Accepts a GraphQL operation at /graphql, decomposes it into the
//! minimum set of REST calls needed for the selected fields, and
//! assembles the results into the shape the client asked for.

mod app;
mod backend;
mod config;
mod graphql;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{AppState, build_app};
use crate::backend::BackendClient;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trellis=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting trellis gateway");
    tracing::info!(backend = %config.backend_url, "Configuration loaded");

    let client = Arc::new(BackendClient::new(
        config.backend_url.clone(),
        config.backend_timeout,
    )?);
    let schema = graphql::build_schema(client.clone());
    tracing::info!("GraphQL schema built");

    let state = AppState {
        config: config.clone(),
        client,
        schema,
    };
    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL playground: http://localhost:{}/graphql",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
