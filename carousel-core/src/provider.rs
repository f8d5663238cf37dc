use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::LookupError,
    model::{CurrentConditions, GeoLocation},
    provider::open_meteo::OpenMeteoProvider,
};

pub mod open_meteo;

/// Resolves a free-form city name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Fails with [`LookupError::NotFound`] when nothing matches `city`.
    async fn geocode(&self, city: &str) -> Result<GeoLocation, LookupError>;
}

/// Reports the weather right now at a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, LookupError>;
}

/// Construct the Open-Meteo provider using the endpoints from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenMeteoProvider> {
    OpenMeteoProvider::new(&config.endpoints.geocoding, &config.endpoints.forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_from_default_config() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg).expect("default endpoints must be valid");
        assert_eq!(provider.geocoding_url().as_str(), crate::config::DEFAULT_GEOCODING_URL);
        assert_eq!(provider.forecast_url().as_str(), crate::config::DEFAULT_FORECAST_URL);
    }

    #[test]
    fn provider_from_config_rejects_bad_endpoint() {
        let mut cfg = Config::default();
        cfg.endpoints.forecast = "not a url".into();

        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Invalid forecast endpoint"));
    }
}
