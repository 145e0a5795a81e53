use stratus_types::{
    Coordinate, Temperature, TemperatureCategory, WeatherError, WeatherSummary,
    classify_fahrenheit,
};

#[test]
fn coordinate_accepts_full_earth_bounds() {
    for (lat, lon) in [(0.0, 0.0), (-90.0, -180.0), (90.0, 180.0), (47.6, -122.3)] {
        assert!(Coordinate::new(lat, lon).is_ok(), "({lat}, {lon})");
    }
}

#[test]
fn coordinate_rejects_out_of_range_axes() {
    for (lat, lon) in [(90.1, 0.0), (-90.1, 0.0), (0.0, 180.1), (0.0, -180.1)] {
        let err = Coordinate::new(lat, lon).unwrap_err();
        match err {
            WeatherError::Validation(msg) => {
                assert_eq!(
                    msg,
                    "Latitude must be between -90 and 90, and longitude between -180 and 180."
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn coordinate_rejects_nan() {
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::NAN).is_err());
}

#[test]
fn rounded_key_pads_to_four_decimals() {
    let coord = Coordinate::new(47.6, -122.3).unwrap();
    assert_eq!(coord.rounded_key(), "47.6000,-122.3000");

    let noisy = Coordinate::new(47.600_04, -122.300_04).unwrap();
    assert_eq!(noisy.rounded_key(), "47.6000,-122.3000");
}

#[test]
fn classification_thresholds_are_inclusive() {
    assert_eq!(classify_fahrenheit(85.0), TemperatureCategory::Hot);
    assert_eq!(classify_fahrenheit(100.0), TemperatureCategory::Hot);
    assert_eq!(classify_fahrenheit(45.0), TemperatureCategory::Cold);
    assert_eq!(classify_fahrenheit(10.0), TemperatureCategory::Cold);
    assert_eq!(classify_fahrenheit(45.1), TemperatureCategory::Moderate);
    assert_eq!(classify_fahrenheit(84.9), TemperatureCategory::Moderate);
}

#[test]
fn summary_serializes_with_wire_field_names() {
    let summary = WeatherSummary {
        lat: 47.6,
        lon: -122.3,
        short_forecast: "Hot and sunny".to_string(),
        temperature: Temperature {
            value: 90.0,
            unit: "F".to_string(),
        },
        category: TemperatureCategory::Hot,
    };

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["lat"].as_f64(), Some(47.6));
    assert_eq!(json["lon"].as_f64(), Some(-122.3));
    assert_eq!(json["shortForecast"].as_str(), Some("Hot and sunny"));
    assert_eq!(json["temperature"]["value"].as_f64(), Some(90.0));
    assert_eq!(json["temperature"]["unit"].as_str(), Some("F"));
    assert_eq!(json["category"].as_str(), Some("hot"));
}
