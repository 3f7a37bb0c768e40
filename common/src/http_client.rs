use crate::errors::AppError;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{info, instrument, warn};

/// Error body shape shared by the upstream APIs we call
#[derive(Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

/// Thin HTTP client for upstream GETs.
///
/// Every call is a single attempt: no retries and no deadline.
#[derive(Clone, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Join `base` and `path` and append the query parameters, encoded.
    pub fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url, AppError> {
        let raw = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse_with_params(&raw, params)
            .map_err(|e| AppError::internal(format!("Invalid upstream URL {}: {}", raw, e)))
    }

    /// Fetch and decode a JSON body.
    pub async fn get_json<T>(&self, url: Url) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let text = self.get_text(url).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch a JSON body and hand it back untouched.
    ///
    /// The body is checked to be well-formed JSON but never re-serialized.
    pub async fn get_raw_json(&self, url: Url) -> Result<String, AppError> {
        let text = self.get_text(url).await?;
        serde_json::from_str::<IgnoredAny>(&text)?;
        Ok(text)
    }

    // Query strings carry credentials; only the path is recorded.
    #[instrument(skip(self, url), fields(path = %url.path()))]
    async fn get_text(&self, url: Url) -> Result<String, AppError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<UpstreamErrorBody>(&text)
                .ok()
                .and_then(|body| body.message);
            warn!(status = status.as_u16(), message = ?message, "Upstream returned an error");
            return Err(AppError::http(status.as_u16(), message));
        }

        info!(status = status.as_u16(), "Upstream request successful");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[test]
    fn build_url_encodes_parameters() {
        let url = HttpClient::build_url(
            "https://api.example.com/data/2.5/",
            "/weather",
            &[("q", "New York"), ("units", "metric")],
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.example.com/data/2.5/weather?q=New+York&units=metric"
        );
    }

    #[test]
    fn build_url_rejects_garbage_base() {
        let err = HttpClient::build_url("not a url", "weather", &[]).unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[tokio::test]
    async fn error_status_carries_upstream_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "Atlantis"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "cod": "404", "message": "city not found" })),
            )
            .mount(&mock_server)
            .await;

        let url =
            HttpClient::build_url(&mock_server.uri(), "weather", &[("q", "Atlantis")]).unwrap();
        let err = HttpClient::new()
            .get_json::<serde_json::Value>(url)
            .await
            .unwrap_err();

        assert_eq!(err.upstream_status(), Some(404));
        assert_eq!(err.upstream_message(), Some("city not found"));
    }

    #[tokio::test]
    async fn error_status_without_json_body_has_no_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/error"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let url = HttpClient::build_url(&mock_server.uri(), "error", &[]).unwrap();
        let err = HttpClient::new().get_raw_json(url).await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(503));
        assert_eq!(err.upstream_message(), None);
    }

    #[tokio::test]
    async fn raw_json_is_returned_verbatim() {
        let mock_server = MockServer::start().await;
        let body = r#"{"name":"London","main":{"temp":15.2},  "b":1,"a":2}"#;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&mock_server)
            .await;

        let url = HttpClient::build_url(&mock_server.uri(), "weather", &[]).unwrap();
        let text = HttpClient::new().get_raw_json(url).await.unwrap();

        assert_eq!(text, body);
    }

    #[tokio::test]
    async fn raw_json_rejects_non_json_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let url = HttpClient::build_url(&mock_server.uri(), "weather", &[]).unwrap();
        let err = HttpClient::new().get_raw_json(url).await.unwrap_err();

        assert!(matches!(err, AppError::ParseError(_)));
    }
}
