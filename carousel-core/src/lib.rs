//! Core library for the `carousel` CLI.
//!
//! This crate defines:
//! - The seven weather categories and the WMO code classifier
//! - Carousel state (rotating / stopped on a category) and its transitions
//! - Geocoding and current-weather collaborators, with an Open-Meteo client
//! - The fetch sequence tying them together
//! - Configuration handling
//!
//! It is used by `carousel-cli`, but has no terminal dependencies and can be
//! driven by any front end.

pub mod carousel;
pub mod category;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;

pub use carousel::{Carousel, CarouselState, QUANTITY, facing_angle, position_index};
pub use category::{Category, classify};
pub use config::{Config, Endpoints};
pub use error::{FetchError, LookupError};
pub use model::{CurrentConditions, GeoLocation, WeatherSnapshot};
pub use provider::{Geocoder, WeatherSource, open_meteo::OpenMeteoProvider, provider_from_config};
pub use session::fetch_weather;
