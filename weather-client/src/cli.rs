use chrono::Utc;
use clap::Parser;
use weather_client::{ProxyClient, Session, Unit, render};

/// Look up a city through the SkySense proxy.
#[derive(Debug, Parser)]
#[command(name = "skysense", version, about = "Weather lookup through the SkySense proxy")]
pub struct Cli {
    /// City name, e.g. "London" or "New York".
    pub city: String,

    /// Base URL of the weather proxy.
    #[arg(long, env = "SKYSENSE_PROXY_URL", default_value = "http://localhost:5000")]
    pub proxy_url: String,

    /// Show temperatures in °F instead of °C.
    #[arg(long)]
    pub imperial: bool,
}

impl Cli {
    /// Run one search and print the resulting screen. Returns whether it succeeded.
    pub async fn run(self) -> bool {
        let unit = if self.imperial {
            Unit::Imperial
        } else {
            Unit::Metric
        };

        let client = ProxyClient::new(self.proxy_url);
        let mut session = Session::new(unit);
        session.search(&client, &self.city).await;

        println!("{}", render::render(&session, Utc::now()));
        session.error().is_none()
    }
}
