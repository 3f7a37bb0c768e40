pub mod api_client;
pub mod config;
pub mod envelope;
pub mod forecast;
pub mod handlers;
pub mod openapi;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api_client::{OpenWeatherClient, UnsplashClient};
use crate::config::Config;
use crate::handlers::AppState;

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            openweather: Arc::new(OpenWeatherClient::from_config(config)),
            unsplash: Arc::new(UnsplashClient::from_config(config)),
        }
    }
}

/// Build the proxy router over the given upstream clients.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/weather/{city}", get(handlers::get_weather))
        .route("/api/forecast/{city}", get(handlers::get_forecast))
        .route("/api/background/{query}", get(handlers::get_background))
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
