//! Integration tests for the Open-Meteo provider and the fetch sequence using wiremock.

use carousel_core::{
    Carousel, CarouselState, Category, FetchError, Geocoder, LookupError, OpenMeteoProvider,
    WeatherSource, fetch_weather,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenMeteoProvider {
    OpenMeteoProvider::new(
        &format!("{}/v1/search", server.uri()),
        &format!("{}/v1/forecast", server.uri()),
    )
    .unwrap()
}

fn geocoding_hit() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 2950159,
                "name": "Berlin",
                "latitude": 52.52437,
                "longitude": 13.41053,
                "country_code": "DE",
                "country": "Germany"
            },
            {
                "id": 5083330,
                "name": "Berlin",
                "latitude": 44.46867,
                "longitude": -71.18508,
                "country": "United States"
            }
        ],
        "generationtime_ms": 0.9
    })
}

fn current_weather(code: i32) -> serde_json::Value {
    serde_json::json!({
        "latitude": 52.52,
        "longitude": 13.419998,
        "current_weather": {
            "time": "2026-10-18T09:00",
            "temperature": 7.6,
            "windspeed": 14.2,
            "winddirection": 230,
            "weathercode": code,
            "is_day": 1
        }
    })
}

#[tokio::test]
async fn test_geocode_takes_first_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Berlin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_hit()))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let location = provider.geocode("Berlin").await.unwrap();

    assert_eq!(location.name, "Berlin");
    assert_eq!(location.country, "Germany");
    assert_eq!(location.latitude, 52.52437);
    assert_eq!(location.longitude, 13.41053);
}

#[tokio::test]
async fn test_geocode_without_results_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "generationtime_ms": 0.4 })),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.geocode("Qwxyzabc123").await.unwrap_err();

    assert!(matches!(err, LookupError::NotFound(ref city) if city == "Qwxyzabc123"));
}

#[tokio::test]
async fn test_geocode_with_empty_results_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.geocode("Nowhere").await.unwrap_err();

    assert!(matches!(err, LookupError::NotFound(_)));
}

#[tokio::test]
async fn test_geocode_missing_country_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "name": "Atlantis", "latitude": 0.0, "longitude": -30.0 }]
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let location = provider.geocode("Atlantis").await.unwrap();

    assert_eq!(location.country, "");
}

#[tokio::test]
async fn test_geocode_server_error_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.geocode("Berlin").await.unwrap_err();

    assert!(matches!(err, LookupError::Unavailable(_)));
}

#[tokio::test]
async fn test_current_weather_sends_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "52.52437"))
        .and(query_param("longitude", "13.41053"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather(61)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let conditions = provider.current_weather(52.52437, 13.41053).await.unwrap();

    assert_eq!(conditions.weather_code, 61);
    assert_eq!(conditions.temperature_c, 7.6);
    assert_eq!(conditions.wind_speed, 14.2);
}

#[tokio::test]
async fn test_current_weather_malformed_body_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"hourly\": {}}"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_weather(1.0, 2.0).await.unwrap_err();

    assert!(matches!(err, LookupError::Unavailable(_)));
}

#[tokio::test]
async fn test_fetch_weather_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_hit()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "52.52437"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather(96)))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let mut carousel = Carousel::new();

    let snapshot = fetch_weather("Berlin", &provider, &provider, &mut carousel).await.unwrap();

    assert_eq!(snapshot.category, Category::Thunderstorm);
    assert_eq!(snapshot.location_line(), "Berlin, Germany");
    assert_eq!(snapshot.rounded_temperature(), 8);
    assert_eq!(carousel.state(), CarouselState::Stopped(Category::Thunderstorm));
    assert_eq!(carousel.position_index(), 6);
}

#[tokio::test]
async fn test_fetch_weather_unknown_city_skips_forecast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather(0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let mut carousel = Carousel::new();

    let err = fetch_weather("Qwxyzabc123", &provider, &provider, &mut carousel)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::CityNotFound { .. }));
    assert_eq!(err.user_message(), "City not found!");
    assert!(carousel.is_rotating());
    assert!(carousel.snapshot().is_none());
}
