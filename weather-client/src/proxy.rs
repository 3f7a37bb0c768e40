use common::models::{BackgroundImage, CurrentWeather, ErrorEnvelope, ForecastResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::ClientError;

/// Typed client for the weather proxy's three endpoints
#[derive(Clone)]
pub struct ProxyClient {
    http: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ClientError> {
        self.get("weather", city).await
    }

    pub async fn forecast(&self, city: &str) -> Result<ForecastResponse, ClientError> {
        self.get("forecast", city).await
    }

    pub async fn background(&self, query: &str) -> Result<BackgroundImage, ClientError> {
        self.get("background", query).await
    }

    #[instrument(skip(self))]
    async fn get<T>(&self, endpoint: &str, segment: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/api/{}/{}",
            self.base_url,
            endpoint,
            urlencoding::encode(segment)
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error)
                .unwrap_or_else(|_| status.to_string());
            warn!(status = status.as_u16(), message = %message, "Proxy returned an error");
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "Proxy request successful");
        Ok(serde_json::from_str(&text)?)
    }
}
