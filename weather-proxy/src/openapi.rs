use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use common::models::{
    BackgroundImage, Condition, CurrentWeather, ErrorEnvelope, ForecastDay, ForecastResponse,
    MainReadings, Wind,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::get_weather,
        handlers::get_forecast,
        handlers::get_background,
    ),
    components(schemas(
        CurrentWeather,
        MainReadings,
        Wind,
        Condition,
        ForecastResponse,
        ForecastDay,
        BackgroundImage,
        ErrorEnvelope,
    )),
    tags(
        (name = "weather", description = "Current conditions and daily forecast"),
        (name = "background", description = "Background image search"),
    ),
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
