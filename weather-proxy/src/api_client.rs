use common::errors::AppError;
use common::http_client::HttpClient;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::config::Config;
use crate::forecast::UpstreamForecast;

/// Client for the OpenWeatherMap 2.5 API (current conditions and forecast)
pub struct OpenWeatherClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.openweather_url.clone(), config.openweather_key.clone())
    }

    /// Current conditions for `city`, as the raw upstream JSON text.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn current_raw(&self, city: &str) -> Result<String, AppError> {
        info!(city = %city, "Fetching current weather from API");
        let url = self.url("weather", city)?;
        self.http_client.get_raw_json(url).await
    }

    #[instrument(skip(self), fields(city = %city))]
    pub async fn forecast(&self, city: &str) -> Result<UpstreamForecast, AppError> {
        info!(city = %city, "Fetching forecast from API");
        let url = self.url("forecast", city)?;
        self.http_client.get_json(url).await
    }

    fn url(&self, endpoint: &str, city: &str) -> Result<reqwest::Url, AppError> {
        HttpClient::build_url(
            &self.base_url,
            endpoint,
            &[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")],
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct RandomPhoto {
    pub urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
pub struct PhotoUrls {
    pub full: String,
}

/// Client for the Unsplash random-photo endpoint
pub struct UnsplashClient {
    http_client: HttpClient,
    base_url: String,
    access_key: String,
}

impl UnsplashClient {
    pub fn new(base_url: String, access_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            access_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.unsplash_url.clone(), config.unsplash_key.clone())
    }

    /// One random landscape photo matching `query`.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn random_landscape(&self, query: &str) -> Result<RandomPhoto, AppError> {
        info!(query = %query, "Fetching background image from API");
        let url = HttpClient::build_url(
            &self.base_url,
            "photos/random",
            &[
                ("query", query),
                ("orientation", "landscape"),
                ("client_id", self.access_key.as_str()),
            ],
        )?;
        self.http_client.get_json(url).await
    }
}
