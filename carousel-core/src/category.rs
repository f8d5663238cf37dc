use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven cards on the carousel.
///
/// Declaration order is the order of the cards around the ring and must not
/// change: `position_index` and the facing angle are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clear,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Clear,
        Category::Cloudy,
        Category::Fog,
        Category::Drizzle,
        Category::Rain,
        Category::Snow,
        Category::Thunderstorm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clear => "clear",
            Category::Cloudy => "cloudy",
            Category::Fog => "fog",
            Category::Drizzle => "drizzle",
            Category::Rain => "rain",
            Category::Snow => "snow",
            Category::Thunderstorm => "thunderstorm",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Clear => "☀️",
            Category::Cloudy => "⛅",
            Category::Fog => "🌫️",
            Category::Drizzle => "🌦️",
            Category::Rain => "🌧️",
            Category::Snow => "❄️",
            Category::Thunderstorm => "⛈️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Clear => "Clear",
            Category::Cloudy => "Cloudy",
            Category::Fog => "Fog",
            Category::Drizzle => "Drizzle",
            Category::Rain => "Rain",
            Category::Snow => "Snow",
            Category::Thunderstorm => "Thunderstorm",
        }
    }

    /// Sentence shown on the faced card once a city has been looked up.
    pub fn headline(&self) -> &'static str {
        match self {
            Category::Clear => "☀️ It's sunny!",
            Category::Cloudy => "⛅ It's cloudy!",
            Category::Fog => "🌫️ Foggy outside!",
            Category::Drizzle => "🌦️ Light drizzle!",
            Category::Rain => "🌧️ It's raining!",
            Category::Snow => "❄️ Snowfall happening!",
            Category::Thunderstorm => "⛈️ Thunderstorm!",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown category '{value}'. Known categories: \
                     clear, cloudy, fog, drizzle, rain, snow, thunderstorm."
                )
            })
    }
}

/// Map a WMO weather code (as reported by Open-Meteo) to a carousel category.
///
/// Groups are tested in order and the first match wins. Codes outside every
/// group, including negative ones, fall back to [`Category::Clear`].
pub fn classify(code: i32) -> Category {
    match code {
        0 => Category::Clear,
        1..=3 => Category::Cloudy,
        45 | 48 => Category::Fog,
        51 | 53 | 55 | 56 | 57 => Category::Drizzle,
        61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Category::Rain,
        71 | 73 | 75 | 77 => Category::Snow,
        95 | 96 | 99 => Category::Thunderstorm,
        _ => Category::Clear,
    }
}
