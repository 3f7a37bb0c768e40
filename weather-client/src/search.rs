use common::models::{CurrentWeather, ForecastDay};
use tracing::{info, instrument, warn};

use crate::error::ClientError;
use crate::proxy::ProxyClient;

/// Everything one successful lookup produces
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub weather: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub background_url: Option<String>,
}

/// Look up `city` through the proxy.
///
/// Weather and forecast are requested concurrently and the lookup fails if
/// either fails; there is no partial result. The background is fetched
/// afterwards from the current condition and only ever degrades to `None`.
#[instrument(skip(client))]
pub async fn lookup(client: &ProxyClient, city: &str) -> Result<SearchResult, ClientError> {
    if city.trim().is_empty() {
        return Err(ClientError::InputMissing);
    }

    let (weather, forecast) = tokio::try_join!(client.current_weather(city), client.forecast(city))?;

    let background_url = match weather.condition_main() {
        Some(condition) => match client.background(condition).await {
            Ok(image) => Some(image.image_url),
            Err(e) => {
                warn!(condition, error = %e, "No background image");
                None
            }
        },
        None => None,
    };

    info!(days = forecast.forecast.len(), "Lookup completed");

    Ok(SearchResult {
        weather,
        forecast: forecast.forecast,
        background_url,
    })
}
