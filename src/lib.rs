pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod services;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use config::AppConfig;
use db::PgRatingRepository;
use errors::AppError;
use middleware::{
    IpRateLimiter, cors_layer, create_rate_limiter, rate_limit_middleware,
    spawn_rate_limiter_pruning,
};
use services::RatingService;
use sqlx::postgres::PgPoolOptions;
use state::AppState;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const RATE_LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    build_router(
        state,
        config,
        create_rate_limiter(config.rate_limit_per_minute),
    )
}

fn build_router(state: AppState, config: &AppConfig, rate_limiter: IpRateLimiter) -> Router {
    // Fallback goes first so unknown routes pass through the same layers
    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ratings_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let postgres = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&postgres).await?;

    let repository = Arc::new(PgRatingRepository::new(postgres));
    let state = AppState {
        ratings: RatingService::new(repository),
    };

    let rate_limiter = create_rate_limiter(config.rate_limit_per_minute);
    spawn_rate_limiter_pruning(rate_limiter.clone(), RATE_LIMITER_PRUNE_INTERVAL);

    let app = build_router(state, &config, rate_limiter);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Ratings API listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
