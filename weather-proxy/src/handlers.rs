use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::header,
    response::{IntoResponse, Json, Response},
};
use common::errors::{ApiError, AppError};
use common::models::{BackgroundImage, CurrentWeather, ErrorEnvelope, ForecastResponse};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api_client::{OpenWeatherClient, UnsplashClient};
use crate::envelope::{BACKGROUND_POLICY, FORECAST_POLICY, FailurePolicy, WEATHER_POLICY};

#[derive(Clone)]
pub struct AppState {
    pub openweather: Arc<OpenWeatherClient>,
    pub unsplash: Arc<UnsplashClient>,
}

/// Unwrap the path segment, or answer with the endpoint's envelope when axum
/// could not decode it (e.g. `%FF`).
fn path_segment(
    path: Result<Path<String>, PathRejection>,
    policy: FailurePolicy,
) -> Result<String, ApiError> {
    path.map(|Path(segment)| segment).map_err(|rejection| {
        let reason = rejection.body_text();
        warn!(error = %reason, "Rejected path segment");
        policy.apply(&AppError::internal(reason))
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check")
    )
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "weather-proxy" }))
}

#[utoipa::path(
    get,
    path = "/api/weather/{city}",
    params(
        ("city" = String, Path, description = "City name, forwarded verbatim")
    ),
    responses(
        (status = 200, description = "Upstream current-weather JSON, unmodified", body = CurrentWeather),
        (status = "default", description = "Upstream status and message", body = ErrorEnvelope)
    ),
    tag = "weather"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let city = path_segment(path, WEATHER_POLICY)?;
    info!(city = %city, "Weather request received");

    let body = state.openweather.current_raw(&city).await.map_err(|e| {
        warn!(city = %city, error = %e, "Weather fetch failed");
        WEATHER_POLICY.apply(&e)
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[utoipa::path(
    get,
    path = "/api/forecast/{city}",
    params(
        ("city" = String, Path, description = "City name, forwarded verbatim")
    ),
    responses(
        (status = 200, description = "Up to three daily samples", body = ForecastResponse),
        (status = 500, description = "Unable to fetch forecast data", body = ErrorEnvelope)
    ),
    tag = "weather"
)]
pub async fn get_forecast(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let city = path_segment(path, FORECAST_POLICY)?;
    info!(city = %city, "Forecast request received");

    let daily = state
        .openweather
        .forecast(&city)
        .await
        .and_then(|upstream| upstream.into_daily())
        .map_err(|e| {
            warn!(city = %city, error = %e, "Forecast fetch failed");
            FORECAST_POLICY.apply(&e)
        })?;

    Ok(Json(daily))
}

#[utoipa::path(
    get,
    path = "/api/background/{query}",
    params(
        ("query" = String, Path, description = "Free-text keyword, usually a weather condition")
    ),
    responses(
        (status = 200, description = "Full-resolution landscape image URL", body = BackgroundImage),
        (status = 500, description = "Failed to fetch background image", body = ErrorEnvelope)
    ),
    tag = "background"
)]
pub async fn get_background(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BackgroundImage>, ApiError> {
    let query = path_segment(path, BACKGROUND_POLICY)?;
    info!(query = %query, "Background request received");

    let photo = state
        .unsplash
        .random_landscape(&query)
        .await
        .map_err(|e| {
            warn!(query = %query, error = %e, "Background fetch failed");
            BACKGROUND_POLICY.apply(&e)
        })?;

    Ok(Json(BackgroundImage {
        image_url: photo.urls.full,
    }))
}
