use crate::{
    carousel::Carousel,
    category::classify,
    error::{FetchError, LookupError},
    model::WeatherSnapshot,
    provider::{Geocoder, WeatherSource},
};

/// Look up `city` and park the carousel on the matching card.
///
/// Geocoding runs first and the weather request only starts once it has
/// succeeded. Any error returns before `carousel` is touched, so a stopped
/// carousel keeps its last selection and a rotating one keeps rotating.
pub async fn fetch_weather(
    city: &str,
    geocoder: &dyn Geocoder,
    source: &dyn WeatherSource,
    carousel: &mut Carousel,
) -> Result<WeatherSnapshot, FetchError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(FetchError::EmptyInput);
    }

    let location = geocoder.geocode(city).await.map_err(|e| match e {
        LookupError::NotFound(_) => {
            tracing::warn!(city, "city not found");
            FetchError::CityNotFound { city: city.to_string() }
        }
        other => fetch_failure(city, other),
    })?;

    let conditions = source
        .current_weather(location.latitude, location.longitude)
        .await
        .map_err(|e| fetch_failure(city, e))?;

    let category = classify(conditions.weather_code);
    let snapshot = WeatherSnapshot::new(location, conditions, category);

    carousel.select_and_stop(category, snapshot.clone());

    tracing::info!(
        city = %snapshot.city,
        country = %snapshot.country,
        code = snapshot.weather_code,
        %category,
        "carousel stopped"
    );

    Ok(snapshot)
}

fn fetch_failure(city: &str, err: LookupError) -> FetchError {
    tracing::error!(city, error = %error_chain(&err), "weather fetch failed");
    FetchError::FetchFailure(err)
}

// Flatten the source chain into one message for the log line.
fn error_chain(err: &LookupError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
