use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// Current conditions at a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
}

/// Everything shown on the faced card, captured from one successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
    pub category: Category,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn new(location: GeoLocation, conditions: CurrentConditions, category: Category) -> Self {
        Self {
            city: location.name,
            country: location.country,
            temperature_c: conditions.temperature_c,
            wind_speed: conditions.wind_speed,
            weather_code: conditions.weather_code,
            category,
            fetched_at: Utc::now(),
        }
    }

    /// "City, Country", or just the city when the provider gave no country.
    pub fn location_line(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }

    /// Whole degrees, halves rounded up.
    pub fn rounded_temperature(&self) -> i64 {
        (self.temperature_c + 0.5).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(country: &str, temperature_c: f64) -> WeatherSnapshot {
        WeatherSnapshot::new(
            GeoLocation {
                latitude: 59.91,
                longitude: 10.75,
                name: "Oslo".into(),
                country: country.into(),
            },
            CurrentConditions { temperature_c, wind_speed: 3.2, weather_code: 71 },
            Category::Snow,
        )
    }

    #[test]
    fn location_line_includes_country_when_present() {
        assert_eq!(snapshot("Norway", 0.0).location_line(), "Oslo, Norway");
        assert_eq!(snapshot("", 0.0).location_line(), "Oslo");
    }

    #[test]
    fn rounded_temperature_rounds_halves_up() {
        assert_eq!(snapshot("Norway", 12.4).rounded_temperature(), 12);
        assert_eq!(snapshot("Norway", 12.5).rounded_temperature(), 13);
        assert_eq!(snapshot("Norway", -2.5).rounded_temperature(), -2);
        assert_eq!(snapshot("Norway", -2.6).rounded_temperature(), -3);
    }

    #[test]
    fn snapshot_copies_lookup_fields() {
        let s = snapshot("Norway", -4.1);
        assert_eq!(s.city, "Oslo");
        assert_eq!(s.weather_code, 71);
        assert_eq!(s.category, Category::Snow);
        assert_eq!(s.wind_speed, 3.2);
    }
}
