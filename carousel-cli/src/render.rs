//! Plain-text rendering of the carousel.

use carousel_core::{Carousel, Category, QUANTITY, WeatherSnapshot, facing_angle, position_index};
use chrono::Local;
use std::fmt::Write;

/// The ring of cards on one line, with the faced card bracketed.
pub fn ring(carousel: &Carousel) -> String {
    let selected = carousel.selected_category();

    Category::ALL
        .iter()
        .map(|c| {
            let card = format!("{} {}", c.emoji(), c.label());
            if Some(*c) == selected { format!("[{card}]") } else { format!(" {card} ") }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The whole carousel: ring, status line and, when stopped, the overlay
/// shown on the faced card.
pub fn carousel(carousel: &Carousel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", ring(carousel));

    match carousel.snapshot() {
        Some(snapshot) if !carousel.is_rotating() => {
            let index = carousel.position_index();
            let _ = writeln!(
                out,
                "facing card {}/{} ({:.0}°)",
                index + 1,
                QUANTITY,
                carousel.facing_angle()
            );
            out.push_str(&overlay(snapshot));
        }
        _ => {
            let _ = writeln!(out, "↻ rotating");
        }
    }

    out
}

fn overlay(snapshot: &WeatherSnapshot) -> String {
    let fetched = snapshot.fetched_at.with_timezone(&Local).format("%H:%M");

    format!(
        "  {}\n  {}\n  {}°C, wind {:.1} km/h (as of {fetched})\n",
        snapshot.location_line(),
        snapshot.category.headline(),
        snapshot.rounded_temperature(),
        snapshot.wind_speed,
    )
}

/// Table of the cards in ring order.
pub fn categories() -> String {
    let mut out = String::new();
    for c in Category::ALL {
        let index = position_index(Some(c));
        let _ = writeln!(
            out,
            "{index}  {:>6.1}°  {} {:<13} {}",
            facing_angle(index),
            c.emoji(),
            c.as_str(),
            c.headline()
        );
    }
    out
}
