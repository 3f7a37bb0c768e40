use common::models::{CurrentWeather, ForecastDay};

use crate::error::ClientError;
use crate::proxy::ProxyClient;
use crate::search::{SearchResult, lookup};
use crate::units::Unit;

/// What the results screen shows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub weather: Option<CurrentWeather>,
    pub forecast: Vec<ForecastDay>,
    pub background_url: Option<String>,
}

impl From<SearchResult> for Snapshot {
    fn from(result: SearchResult) -> Self {
        Self {
            weather: Some(result.weather),
            forecast: result.forecast,
            background_url: result.background_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Landing,
    Results(Snapshot),
}

/// UI state: current screen, display unit and the last error.
///
/// Landing moves to Results on the first successful search and only goes
/// back on [`Session::reset`].
#[derive(Debug, Default)]
pub struct Session {
    view: View,
    unit: Unit,
    error: Option<String>,
}

impl Session {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn search(&mut self, client: &ProxyClient, city: &str) {
        let outcome = lookup(client, city).await;
        self.apply(outcome);
    }

    pub fn apply(&mut self, outcome: Result<SearchResult, ClientError>) {
        match outcome {
            Ok(result) => {
                self.error = None;
                self.view = View::Results(result.into());
            }
            // Nothing was fetched, so whatever is on screen stays.
            Err(e @ ClientError::InputMissing) => {
                self.error = Some(e.user_message().to_string());
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                if let View::Results(snapshot) = &mut self.view {
                    *snapshot = Snapshot::default();
                }
            }
        }
    }

    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    pub fn reset(&mut self) {
        self.view = View::Landing;
        self.error = None;
    }
}
