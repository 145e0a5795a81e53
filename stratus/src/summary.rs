use stratus_nws::ForecastPeriod;
use stratus_types::{Coordinate, Temperature, WeatherSummary, classify_fahrenheit};

/// Compose the client-facing summary for a resolved period.
///
/// Classification always runs on the Fahrenheit-normalized reading
/// (`F = C * 9/5 + 32`, pass-through when the unit is already Fahrenheit),
/// while the reported temperature keeps the upstream value and unit
/// untouched. Pure; cannot fail on a well-formed period.
#[must_use]
pub fn build_summary(coordinate: &Coordinate, period: &ForecastPeriod) -> WeatherSummary {
    let temp_f = if period.temperature_unit.eq_ignore_ascii_case("f") {
        period.temperature
    } else {
        period.temperature * 9.0 / 5.0 + 32.0
    };

    WeatherSummary {
        lat: coordinate.lat(),
        lon: coordinate.lon(),
        short_forecast: period.short_forecast.clone(),
        temperature: Temperature {
            value: period.temperature,
            unit: period.temperature_unit.clone(),
        },
        category: classify_fahrenheit(temp_f),
    }
}
