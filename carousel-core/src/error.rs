use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single collaborator lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no location matches '{0}'")]
    NotFound(String),

    #[error("weather service unavailable")]
    Unavailable(#[source] BoxError),
}

/// Why a fetch attempt ended without changing the carousel.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("city name is empty")]
    EmptyInput,

    #[error("city '{city}' not found")]
    CityNotFound { city: String },

    #[error("failed to fetch weather")]
    FetchFailure(#[source] LookupError),
}

impl FetchError {
    /// Notification shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::EmptyInput => "Please enter a city name!",
            FetchError::CityNotFound { .. } => "City not found!",
            FetchError::FetchFailure(_) => "Error fetching weather.",
        }
    }
}
