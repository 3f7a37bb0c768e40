use axum::http::StatusCode;
use common::errors::{ApiError, AppError};

pub const WEATHER_FALLBACK: &str = "City not found or API error";
pub const FORECAST_FAILURE: &str = "Unable to fetch forecast data";
pub const BACKGROUND_FAILURE: &str = "Failed to fetch background image";

/// How an endpoint turns an upstream failure into an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Forward the upstream status and message, falling back to 500 and
    /// `fallback` when the upstream supplied neither.
    MirrorUpstream { fallback: &'static str },
    /// Always 500 with a fixed message, whatever the cause.
    Fixed { message: &'static str },
}

pub const WEATHER_POLICY: FailurePolicy = FailurePolicy::MirrorUpstream {
    fallback: WEATHER_FALLBACK,
};
pub const FORECAST_POLICY: FailurePolicy = FailurePolicy::Fixed {
    message: FORECAST_FAILURE,
};
pub const BACKGROUND_POLICY: FailurePolicy = FailurePolicy::Fixed {
    message: BACKGROUND_FAILURE,
};

impl FailurePolicy {
    pub fn apply(&self, err: &AppError) -> ApiError {
        match self {
            FailurePolicy::MirrorUpstream { fallback } => {
                let status = err
                    .upstream_status()
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = err.upstream_message().unwrap_or(*fallback);
                ApiError::new(status, message)
            }
            FailurePolicy::Fixed { message } => ApiError::internal(*message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_forwards_status_and_message() {
        let err = AppError::http(404, Some("city not found".to_string()));
        assert_eq!(
            WEATHER_POLICY.apply(&err),
            ApiError::new(StatusCode::NOT_FOUND, "city not found")
        );
    }

    #[test]
    fn mirror_keeps_status_when_message_missing() {
        let err = AppError::http(401, None);
        assert_eq!(
            WEATHER_POLICY.apply(&err),
            ApiError::new(StatusCode::UNAUTHORIZED, WEATHER_FALLBACK)
        );
    }

    #[test]
    fn mirror_defaults_to_500_without_upstream_status() {
        let err = AppError::internal("bad url");
        assert_eq!(
            WEATHER_POLICY.apply(&err),
            ApiError::internal(WEATHER_FALLBACK)
        );
    }

    #[test]
    fn fixed_ignores_upstream_details() {
        for status in [400, 401, 404, 429, 503] {
            let err = AppError::http(status, Some("upstream said no".to_string()));
            assert_eq!(
                FORECAST_POLICY.apply(&err),
                ApiError::internal(FORECAST_FAILURE)
            );
            assert_eq!(
                BACKGROUND_POLICY.apply(&err),
                ApiError::internal(BACKGROUND_FAILURE)
            );
        }
    }
}
