//! Reshaping of the 5-day / 3-hour upstream forecast into daily samples.

use common::errors::AppError;
use common::models::{Condition, ForecastDay, ForecastResponse};
use serde::Deserialize;

/// Upstream list entries are 3 hours apart, so every 8th one is a day later.
pub const SAMPLE_STRIDE: usize = 8;
pub const MAX_DAYS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct UpstreamForecast {
    pub city: UpstreamCity,
    pub list: Vec<UpstreamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamCity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamEntry {
    pub dt_txt: String,
    pub main: UpstreamMain,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamMain {
    pub temp: f64,
}

impl UpstreamForecast {
    /// Keep entries 0, 8 and 16. Short lists give fewer days, never padding.
    pub fn into_daily(self) -> Result<ForecastResponse, AppError> {
        let forecast = self
            .list
            .into_iter()
            .step_by(SAMPLE_STRIDE)
            .take(MAX_DAYS)
            .map(UpstreamEntry::into_day)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ForecastResponse {
            city: self.city.name,
            forecast,
        })
    }
}

impl UpstreamEntry {
    fn into_day(self) -> Result<ForecastDay, AppError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            AppError::internal(format!("Forecast entry {} has no condition", self.dt_txt))
        })?;

        Ok(ForecastDay {
            date: self.dt_txt,
            temperature_celsius: self.main.temp,
            condition_main: condition.main,
            condition_description: condition.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> UpstreamEntry {
        UpstreamEntry {
            dt_txt: format!("slot-{i}"),
            main: UpstreamMain { temp: i as f64 },
            weather: vec![Condition {
                main: format!("main-{i}"),
                description: format!("desc-{i}"),
            }],
        }
    }

    fn forecast(len: usize) -> UpstreamForecast {
        UpstreamForecast {
            city: UpstreamCity {
                name: "London".to_string(),
            },
            list: (0..len).map(entry).collect(),
        }
    }

    #[test]
    fn samples_indices_zero_eight_sixteen() {
        let daily = forecast(40).into_daily().unwrap();

        assert_eq!(daily.city, "London");
        let dates: Vec<_> = daily.forecast.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["slot-0", "slot-8", "slot-16"]);
        assert_eq!(daily.forecast[1].temperature_celsius, 8.0);
        assert_eq!(daily.forecast[2].condition_main, "main-16");
        assert_eq!(daily.forecast[2].condition_description, "desc-16");
    }

    #[test]
    fn exactly_seventeen_entries_gives_three_days() {
        assert_eq!(forecast(17).into_daily().unwrap().forecast.len(), 3);
    }

    #[test]
    fn short_list_gives_fewer_days() {
        assert_eq!(forecast(16).into_daily().unwrap().forecast.len(), 2);
        assert_eq!(forecast(1).into_daily().unwrap().forecast.len(), 1);
        assert!(forecast(0).into_daily().unwrap().forecast.is_empty());
    }

    #[test]
    fn sampled_entry_without_condition_fails() {
        let mut upstream = forecast(10);
        upstream.list[8].weather.clear();
        assert!(upstream.into_daily().is_err());
    }

    #[test]
    fn unsampled_entry_without_condition_is_ignored() {
        let mut upstream = forecast(10);
        upstream.list[3].weather.clear();
        assert_eq!(upstream.into_daily().unwrap().forecast.len(), 2);
    }
}
