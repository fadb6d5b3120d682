use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use axum::middleware;
use axum::{Router, extract::Request, response::Response};
use http::{HeaderValue, header};
use tokio_rusqlite::Connection;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::routes;
use crate::api::state::{AppState, SharedState};
use crate::chat::clear_chat_records;
use crate::core::{
    AppConfig,
    db::{async_db, initialize_db},
};

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

pub fn app(shared_state: SharedState) -> Router {
    Router::new()
        // Chat page
        .merge(routes::index::router())
        // API routes
        .nest("/api", routes::router())
        // Static assets in ./web-ui/static
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(middleware::from_fn(set_static_cache_control))
                .service(ServeDir::new("./web-ui/static")),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::clone(&shared_state))
}

/// Create the schema if needed and throw away the chat log from the
/// previous run. Returns the number of records removed.
pub async fn reset_db(db: &Connection) -> Result<usize> {
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await
    .context("Failed to initialize db")?;

    clear_chat_records(db).await
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = async_db(&config.db_path).await?;
    let cleared = reset_db(&db).await?;
    tracing::debug!("Cleared {} chat records from the previous run", cleared);

    tracing::info!(
        "Using model {} with temperature {}",
        config.gemini_model,
        config.temperature
    );

    let app_state = AppState::new(db, config)?;
    let shared_state = Arc::new(RwLock::new(app_state));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    tracing::info!("Server started. Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
