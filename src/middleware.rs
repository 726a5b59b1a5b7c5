use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;

pub type IpRateLimiter = Arc<RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>>;

pub fn create_rate_limiter(per_minute: u32) -> IpRateLimiter {
    // A zero quota would reject everything, treat it as one request per minute
    let per_minute = NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute)))
}

/// Drops per-IP entries whose quota has fully refilled so the keyed store stays bounded.
pub fn prune_rate_limiter(rate_limiter: &IpRateLimiter) {
    rate_limiter.retain_recent();
    rate_limiter.shrink_to_fit();
    tracing::debug!("Rate limiter tracking {} client(s)", rate_limiter.len());
}

pub fn spawn_rate_limiter_pruning(rate_limiter: IpRateLimiter, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            prune_rate_limiter(&rate_limiter);
        }
    })
}

pub async fn rate_limit_middleware(
    rate_limiter: IpRateLimiter,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let client_ip =
        if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
            addr.ip().to_string()
        } else {
            "unknown".to_string()
        };

    match rate_limiter.check_key(&client_ip) {
        Ok(_) => Ok(next.run(request).await),
        Err(_) => {
            tracing::warn!("Rate limit exceeded for IP: {}", client_ip);
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            // A wildcard cannot be listed with other origins nor combined with credentials
            Ok(value) if value == "*" => {
                tracing::warn!("Skipping wildcard CORS origin, list explicit origins instead");
                None
            }
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    tracing::info!("CORS allowed origins: {:?}", origins);

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
