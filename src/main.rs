use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use ecoute_rdv::config::AppConfig;
use ecoute_rdv::handlers;
use ecoute_rdv::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    tracing::info!(
        whatsapp = %config.owner_whatsapp,
        telegram = %config.owner_telegram,
        "owner contacts loaded"
    );

    let state = Arc::new(AppState::new(&config));

    let app = Router::new()
        .route("/", get(handlers::booking::booking_page))
        .route("/health", get(handlers::health::health))
        .route("/api/booking", post(handlers::booking::submit_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
