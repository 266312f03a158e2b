pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::{Database, VocabularySource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn VocabularySource>,
}

impl AppState {
    pub fn new(source: impl VocabularySource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Build the router with every endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(routes::HOME_PATH, get(routes::home::index))
        // Browse routes
        .route(routes::WORDS_PATH, get(routes::words::browse))
        // Quiz routes
        .route(routes::QUIZ_PATH, get(routes::quiz::categories))
        .route(routes::QUIZ_START_PATH, get(routes::quiz::start))
        .route(routes::QUIZ_ANSWER_PATH, post(routes::quiz::answer))
        .route(routes::QUIZ_ADVANCE_PATH, post(routes::quiz::advance))
        .route(routes::QUIZ_ABORT_PATH, post(routes::quiz::request_abort))
        .route(routes::QUIZ_ABORT_CANCEL_PATH, post(routes::quiz::cancel_abort))
        .route(routes::QUIZ_ABORT_CONFIRM_PATH, post(routes::quiz::confirm_abort))
        .route(routes::QUIZ_SUMMARY_PATH, post(routes::quiz::summary))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let app = router(AppState::new(db));

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
