use std::env;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openweather_url: String,
    pub openweather_key: String,
    pub unsplash_url: String,
    pub unsplash_key: String,
    pub json_logs: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            openweather_url: env::var("OPENWEATHER_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".to_string()),
            // Keys are not validated; a bad key surfaces as an upstream error.
            openweather_key: env::var("OPENWEATHER_KEY").unwrap_or_default(),
            unsplash_url: env::var("UNSPLASH_URL")
                .unwrap_or_else(|_| "https://api.unsplash.com".to_string()),
            unsplash_key: env::var("UNSPLASH_KEY").unwrap_or_default(),
            json_logs: env::var("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Names of credentials that are unset or empty.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openweather_key.is_empty() {
            missing.push("OPENWEATHER_KEY");
        }
        if self.unsplash_key.is_empty() {
            missing.push("UNSPLASH_KEY");
        }
        missing
    }
}
