use std::{sync::Arc, time::Duration};

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod code;
mod config;
mod error;
mod handlers;
mod models;
mod store;

use store::LinkStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: config::AppConfig,
    pub store: LinkStore,
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Assemble the full application router. Split out of `main` so tests can
/// drive the service in-process.
fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Full dump of the current mappings
        .route("/", get(handlers::links::list))
        // Health check — returns 200 OK with no body
        .route("/health", get(|| async { StatusCode::OK }))
        // Wildcard so targets containing slashes are captured whole
        .route("/shorten/*url", get(handlers::links::shorten))
        .route("/:code", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(15)))
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minilink=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting Minilink on {}:{}", config.host, config.port);
    tracing::info!("Base URL: {}", config.base_url);

    let bind_addr = format!("{}:{}", config.host, config.port);

    // Build shared state: one store instance for the process lifetime
    let state = Arc::new(AppState {
        store: LinkStore::new(),
        config,
    });

    let app = app(state);

    // ── Serve ──────────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

// ── Router tests ───────────────────────────────────────────────────────────
