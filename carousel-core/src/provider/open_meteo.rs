use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    error::LookupError,
    model::{CurrentConditions, GeoLocation},
};

use super::{Geocoder, WeatherSource};

/// Open-Meteo geocoding and forecast APIs. Neither needs an API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    geocoding_url: Url,
    forecast_url: Url,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(geocoding_url: &str, forecast_url: &str) -> Result<Self> {
        let geocoding_url = Url::parse(geocoding_url)
            .with_context(|| format!("Invalid geocoding endpoint: {geocoding_url}"))?;
        let forecast_url = Url::parse(forecast_url)
            .with_context(|| format!("Invalid forecast endpoint: {forecast_url}"))?;

        Ok(Self { geocoding_url, forecast_url, http: Client::new() })
    }

    pub fn geocoding_url(&self) -> &Url {
        &self.geocoding_url
    }

    pub fn forecast_url(&self) -> &Url {
        &self.forecast_url
    }

    async fn search(&self, city: &str) -> Result<Option<GeoLocation>> {
        let res = self
            .http
            .get(self.geocoding_url.clone())
            .query(&[("name", city)])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (geocoding)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo geocoding response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmSearchResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo geocoding JSON")?;

        Ok(parsed.results.into_iter().next().map(|r| GeoLocation {
            latitude: r.latitude,
            longitude: r.longitude,
            name: r.name,
            country: r.country.unwrap_or_default(),
        }))
    }

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions> {
        let res = self
            .http
            .get(self.forecast_url.clone())
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")?;

        let cw = parsed.current_weather;

        Ok(CurrentConditions {
            temperature_c: cw.temperature,
            wind_speed: cw.windspeed,
            weather_code: cw.weathercode,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmPlace {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmSearchResponse {
    // Omitted entirely when nothing matches.
    #[serde(default)]
    results: Vec<OmPlace>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: OmCurrentWeather,
}

#[async_trait]
impl Geocoder for OpenMeteoProvider {
    async fn geocode(&self, city: &str) -> Result<GeoLocation, LookupError> {
        tracing::debug!(city, url = %self.geocoding_url, "geocoding city");

        match self.search(city).await {
            Ok(Some(location)) => Ok(location),
            Ok(None) => Err(LookupError::NotFound(city.to_string())),
            Err(e) => Err(LookupError::Unavailable(e.into())),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoProvider {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, LookupError> {
        tracing::debug!(latitude, longitude, url = %self.forecast_url, "fetching current weather");

        self.fetch_current(latitude, longitude)
            .await
            .map_err(|e| LookupError::Unavailable(e.into()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
