use serde::{Deserialize, Serialize};

use crate::{category::Category, model::WeatherSnapshot};

/// Number of cards on the ring.
pub const QUANTITY: usize = Category::ALL.len();

/// Whether the ring is spinning or parked in front of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "category", rename_all = "lowercase")]
pub enum CarouselState {
    #[default]
    Rotating,
    Stopped(Category),
}

impl CarouselState {
    pub fn is_rotating(&self) -> bool {
        matches!(self, CarouselState::Rotating)
    }

    pub fn selected_category(&self) -> Option<Category> {
        match self {
            CarouselState::Rotating => None,
            CarouselState::Stopped(category) => Some(*category),
        }
    }
}

/// Zero-based rank of `category` on the ring. `None` maps to the first card.
pub fn position_index(category: Option<Category>) -> usize {
    category
        .and_then(|c| Category::ALL.iter().position(|known| *known == c))
        .unwrap_or(0)
}

/// Degrees the ring has to turn so that the card at `index` faces the viewer.
pub fn facing_angle(index: usize) -> f64 {
    (index % QUANTITY) as f64 * 360.0 / QUANTITY as f64
}

/// The carousel's state together with the snapshot shown on the faced card.
///
/// The two fields only change together, through [`Carousel::select_and_stop`]
/// and [`Carousel::resume`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Carousel {
    state: CarouselState,
    snapshot: Option<WeatherSnapshot>,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_rotating(&self) -> bool {
        self.state.is_rotating()
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.state.selected_category()
    }

    /// Index of the faced card; 0 while rotating.
    pub fn position_index(&self) -> usize {
        position_index(self.selected_category())
    }

    pub fn facing_angle(&self) -> f64 {
        facing_angle(self.position_index())
    }

    /// Stop the ring in front of `category` and show `snapshot` on it.
    pub fn select_and_stop(&mut self, category: Category, snapshot: WeatherSnapshot) -> CarouselState {
        *self = Self { state: CarouselState::Stopped(category), snapshot: Some(snapshot) };
        self.state
    }

    /// Drop the selection and snapshot and let the ring spin again.
    pub fn resume(&mut self) -> CarouselState {
        *self = Self::default();
        self.state
    }
}
