//! Plain-text rendering of a [`Session`].

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use common::models::{CurrentWeather, ForecastDay};

use crate::units::Unit;
use crate::view::{Session, View};

pub const TITLE: &str = "SkySense";
const FORECAST_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock time at the location, `Fri, 16 Oct 2026 12:00:00`.
///
/// An offset chrono cannot represent leaves `now` unshifted.
pub fn local_time(offset_seconds: i64, now: DateTime<Utc>) -> String {
    TimeDelta::try_seconds(offset_seconds)
        .and_then(|offset| now.checked_add_signed(offset))
        .unwrap_or(now)
        .format("%a, %d %b %Y %H:%M:%S")
        .to_string()
}

/// Weekday name for an upstream forecast timestamp; the raw text if it
/// doesn't parse.
pub fn weekday(date: &str) -> String {
    NaiveDateTime::parse_from_str(date, FORECAST_DATE_FORMAT)
        .map(|dt| dt.format("%A").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn current_lines(weather: &CurrentWeather, unit: Unit, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = vec![
        weather.location_name().to_string(),
        format!(
            "Local time: {}",
            local_time(weather.timezone_offset_seconds(), now)
        ),
        format!("Temp: {}", unit.format(weather.temperature_celsius())),
        format!("Humidity: {}%", weather.humidity_percent()),
        format!("Wind: {} m/s", weather.wind_speed_mps()),
    ];
    if let Some(description) = weather.condition_description() {
        lines.push(description.to_string());
    }
    lines
}

pub fn forecast_line(day: &ForecastDay, unit: Unit) -> String {
    format!(
        "{}: {} {}",
        weekday(&day.date),
        unit.format(day.temperature_celsius),
        day.condition_description
    )
}

pub fn render(session: &Session, now: DateTime<Utc>) -> String {
    let mut lines = vec![TITLE.to_string()];

    if let Some(error) = session.error() {
        lines.push(error.to_string());
    }

    match session.view() {
        View::Landing => {
            if session.error().is_none() {
                lines.push("Enter a city name to get started.".to_string());
            }
        }
        View::Results(snapshot) => {
            if let Some(weather) = &snapshot.weather {
                lines.extend(current_lines(weather, session.unit(), now));
            }
            if !snapshot.forecast.is_empty() {
                lines.push(String::new());
                lines.extend(
                    snapshot
                        .forecast
                        .iter()
                        .map(|day| forecast_line(day, session.unit())),
                );
            }
            if let Some(url) = &snapshot.background_url {
                lines.push(String::new());
                lines.push(format!("Background: {url}"));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchResult;
    use chrono::TimeZone;
    use common::models::{Condition, MainReadings, Wind};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn london() -> CurrentWeather {
        CurrentWeather {
            name: "London".to_string(),
            main: MainReadings {
                temp: 15.2,
                humidity: 80,
            },
            wind: Wind { speed: 4.1 },
            weather: vec![Condition {
                main: "Rain".to_string(),
                description: "light rain".to_string(),
            }],
            timezone: 0,
        }
    }

    fn day(date: &str, temp: f64) -> ForecastDay {
        ForecastDay {
            date: date.to_string(),
            temperature_celsius: temp,
            condition_main: "Clouds".to_string(),
            condition_description: "overcast clouds".to_string(),
        }
    }

    #[test]
    fn london_scenario_lines() {
        let lines = current_lines(&london(), Unit::Metric, now());
        assert_eq!(
            lines,
            [
                "London",
                "Local time: Fri, 16 Oct 2026 12:00:00",
                "Temp: 15°C",
                "Humidity: 80%",
                "Wind: 4.1 m/s",
                "light rain",
            ]
        );
    }

    #[test]
    fn imperial_changes_temperature_only() {
        let lines = current_lines(&london(), Unit::Imperial, now());
        assert_eq!(lines[2], "Temp: 59°F");
        assert_eq!(lines[4], "Wind: 4.1 m/s");
    }

    #[test]
    fn local_time_applies_offset() {
        assert_eq!(local_time(-18_000, now()), "Fri, 16 Oct 2026 07:00:00");
        assert_eq!(local_time(32_400, now()), "Fri, 16 Oct 2026 21:00:00");
    }

    #[test]
    fn local_time_ignores_unrepresentable_offset() {
        assert_eq!(local_time(i64::MAX, now()), "Fri, 16 Oct 2026 12:00:00");
        assert_eq!(local_time(i64::MIN, now()), "Fri, 16 Oct 2026 12:00:00");
        assert_eq!(local_time(i64::MAX / 1_000, now()), "Fri, 16 Oct 2026 12:00:00");
    }

    #[test]
    fn weekday_from_forecast_date() {
        assert_eq!(weekday("2026-10-17 12:00:00"), "Saturday");
        assert_eq!(weekday("tomorrow-ish"), "tomorrow-ish");
    }

    #[test]
    fn forecast_line_format() {
        assert_eq!(
            forecast_line(&day("2026-10-18 00:00:00", 9.5), Unit::Metric),
            "Sunday: 10°C overcast clouds"
        );
    }

    #[test]
    fn landing_prompts_for_city() {
        let session = Session::default();
        assert_eq!(
            render(&session, now()),
            "SkySense\nEnter a city name to get started."
        );
    }

    #[test]
    fn results_render_any_number_of_days() {
        let mut session = Session::default();
        session.apply(Ok(SearchResult {
            weather: london(),
            forecast: vec![day("2026-10-17 12:00:00", 12.0)],
            background_url: None,
        }));

        let text = render(&session, now());
        assert!(text.contains("Temp: 15°C"));
        assert!(text.contains("Saturday: 12°C overcast clouds"));
        assert!(!text.contains("Background"));
    }
}
