//! Weather data models
//!
//! Types for reading the `current` block of an Open-Meteo response.

use std::fmt;

use serde_json::{Map, Value};

/// Variables requested in the `current` query parameter, in request order
pub const CURRENT_VARIABLES: [&str; 15] = [
    "temperature_2m",
    "is_day",
    "showers",
    "cloud_cover",
    "wind_speed_10m",
    "wind_direction_10m",
    "pressure_msl",
    "snowfall",
    "precipitation",
    "relative_humidity_2m",
    "apparent_temperature",
    "rain",
    "weather_code",
    "surface_pressure",
    "wind_gusts_10m",
];

/// Text returned to the caller whenever current conditions cannot be produced
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch current weather data for this location.";

/// Placeholder rendered for a field the response did not carry
const ABSENT_PLACEHOLDER: &str = "N/A";

/// A single named value read from the `current` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Value as it appeared in the response, without unit conversion or rounding
    Present(String),
    /// Key missing or `null`
    Absent,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => f.write_str(value),
            Self::Absent => f.write_str(ABSENT_PLACEHOLDER),
        }
    }
}

/// Current conditions block of an Open-Meteo response
///
/// The block is kept loosely typed: the upstream API omits variables it
/// cannot provide for a location, and every consumed field is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    fields: Map<String, Value>,
}

impl CurrentConditions {
    /// Extract the `current` object from a decoded response body
    ///
    /// Returns `None` when the body is not an object, has no `current` key,
    /// or `current` is not itself an object.
    pub fn from_response(mut body: Value) -> Option<Self> {
        match body.get_mut("current").map(Value::take) {
            Some(Value::Object(fields)) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Look up a variable by its Open-Meteo name
    pub fn field(&self, key: &str) -> FieldValue {
        match self.fields.get(key) {
            None | Some(Value::Null) => FieldValue::Absent,
            Some(Value::String(s)) => FieldValue::Present(s.clone()),
            Some(other) => FieldValue::Present(other.to_string()),
        }
    }

    /// Render the fixed seven-line summary
    pub fn summary(&self) -> String {
        format!(
            "Temperature: {}°C\n\
             Feels Like: {}°C\n\
             Humidity: {}%\n\
             Cloud Cover: {}%\n\
             Wind: {} km/h from {}°\n\
             Rain: {} mm\n\
             Pressure: {} hPa",
            self.field("temperature_2m"),
            self.field("apparent_temperature"),
            self.field("relative_humidity_2m"),
            self.field("cloud_cover"),
            self.field("wind_speed_10m"),
            self.field("wind_direction_10m"),
            self.field("rain"),
            self.field("surface_pressure"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn berlin_response() -> Value {
        json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "current": {
                "time": "2026-10-19T12:00",
                "temperature_2m": 18.3,
                "apparent_temperature": 17.9,
                "relative_humidity_2m": 60,
                "cloud_cover": 40,
                "wind_speed_10m": 12.1,
                "wind_direction_10m": 230,
                "rain": 0.0,
                "surface_pressure": 1012.4
            }
        })
    }

    #[test]
    fn test_summary_renders_all_fields_verbatim() {
        let current = CurrentConditions::from_response(berlin_response()).expect("has current");

        assert_eq!(
            current.summary(),
            "Temperature: 18.3°C\n\
             Feels Like: 17.9°C\n\
             Humidity: 60%\n\
             Cloud Cover: 40%\n\
             Wind: 12.1 km/h from 230°\n\
             Rain: 0.0 mm\n\
             Pressure: 1012.4 hPa"
        );
    }

    #[test]
    fn test_summary_marks_missing_fields() {
        let body = json!({ "current": { "temperature_2m": -3.5, "rain": 1.2 } });
        let current = CurrentConditions::from_response(body).expect("has current");

        assert_eq!(
            current.summary(),
            "Temperature: -3.5°C\n\
             Feels Like: N/A°C\n\
             Humidity: N/A%\n\
             Cloud Cover: N/A%\n\
             Wind: N/A km/h from N/A°\n\
             Rain: 1.2 mm\n\
             Pressure: N/A hPa"
        );
    }

    #[test]
    fn test_empty_current_renders_all_placeholders() {
        let current = CurrentConditions::from_response(json!({ "current": {} })).expect("has current");
        let summary = current.summary();

        assert_eq!(summary.matches("N/A").count(), 8);
        assert_eq!(summary.lines().count(), 7);
    }

    #[test]
    fn test_field_value_kinds() {
        let body = json!({
            "current": {
                "temperature_2m": 21,
                "time": "2026-10-19T12:00",
                "is_day": true,
                "rain": null
            }
        });
        let current = CurrentConditions::from_response(body).expect("has current");

        assert_eq!(current.field("temperature_2m"), FieldValue::Present("21".to_string()));
        assert_eq!(
            current.field("time"),
            FieldValue::Present("2026-10-19T12:00".to_string())
        );
        assert_eq!(current.field("is_day"), FieldValue::Present("true".to_string()));
        assert_eq!(current.field("rain"), FieldValue::Absent);
        assert_eq!(current.field("snowfall"), FieldValue::Absent);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Absent.to_string(), "N/A");
        assert_eq!(FieldValue::Present("1012.4".to_string()).to_string(), "1012.4");
    }

    #[test]
    fn test_from_response_requires_current_object() {
        assert!(CurrentConditions::from_response(json!({})).is_none());
        assert!(CurrentConditions::from_response(json!({ "current": 5 })).is_none());
        assert!(CurrentConditions::from_response(json!({ "current": null })).is_none());
        assert!(CurrentConditions::from_response(json!([1, 2, 3])).is_none());
        assert!(CurrentConditions::from_response(json!("current")).is_none());
    }

    #[test]
    fn test_current_variables_order() {
        assert_eq!(CURRENT_VARIABLES.first(), Some(&"temperature_2m"));
        assert_eq!(CURRENT_VARIABLES.last(), Some(&"wind_gusts_10m"));
        assert_eq!(
            CURRENT_VARIABLES.join(","),
            "temperature_2m,is_day,showers,cloud_cover,wind_speed_10m,\
             wind_direction_10m,pressure_msl,snowfall,precipitation,\
             relative_humidity_2m,apparent_temperature,rain,weather_code,\
             surface_pressure,wind_gusts_10m"
        );
    }
}
