//! Synthetic weather forecast generation.

use std::ops::Range;

use chrono::{DateTime, Duration, Utc};

use crate::random::RandomSource;
use crate::types::WeatherForecast;

/// The fixed set of forecast summaries.
pub const SUMMARIES: [&str; 10] = [
    "Freezing", "Bracing", "Chilly", "Cool", "Mild", "Warm", "Balmy", "Hot", "Sweltering",
    "Scorching",
];

/// Celsius range forecasts are drawn from (half-open).
pub const TEMPERATURE_RANGE: Range<i32> = -20..55;

const FORECAST_DAYS: i64 = 5;

/// Generate one forecast per day for the five days after `from`.
pub fn five_day_forecast(random: &dyn RandomSource, from: DateTime<Utc>) -> Vec<WeatherForecast> {
    (1..=FORECAST_DAYS)
        .map(|day| {
            WeatherForecast::new(
                from + Duration::days(day),
                random.int_in(TEMPERATURE_RANGE),
                Some(SUMMARIES[random.index(SUMMARIES.len())].to_string()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededSource;

    #[test]
    fn produces_exactly_five_days() {
        let random = SeededSource::new(42);
        let from = Utc::now();

        let forecasts = five_day_forecast(&random, from);
        assert_eq!(forecasts.len(), 5);

        for (i, forecast) in forecasts.iter().enumerate() {
            assert_eq!(forecast.date, from + Duration::days(i as i64 + 1));
        }
    }

    #[test]
    fn temperatures_and_summaries_stay_in_bounds() {
        let random = SeededSource::new(0);
        let from = Utc::now();

        // Enough rounds to cover the value space.
        for _ in 0..200 {
            for forecast in five_day_forecast(&random, from) {
                assert!(TEMPERATURE_RANGE.contains(&forecast.temperature_c));
                let summary = forecast.summary.as_deref().expect("summary always set");
                assert!(SUMMARIES.contains(&summary));
            }
        }
    }

    #[test]
    fn same_seed_yields_same_forecast() {
        let from = Utc::now();
        let a = five_day_forecast(&SeededSource::new(9), from);
        let b = five_day_forecast(&SeededSource::new(9), from);
        assert_eq!(a, b);
    }
}
