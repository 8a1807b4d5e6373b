//! Turns a [`Reading`] into the three lines the widget shows.
//!
//! Everything here is pure except [`location_message_now`] and
//! [`Presentation::render_now`], which read the local wall clock.

use chrono::{Local, Timelike};

use crate::model::{CELSIUS, Reading};

/// Canned sentences keyed by lower-cased condition label.
///
/// "thunderstrom" is matched as spelled; the upstream label never uses it.
pub const CONDITION_MESSAGES: &[(&str, &str)] = &[
    ("sunny", "It's a Sunny Day"),
    ("partly cloudy", "Expect some clouds and sunshine."),
    ("cloudy", "It's Cloudy Day."),
    ("overcast", "The sky is overcast."),
    ("rain", "Don't forget your umbrella! It's raining."),
    ("thunderstrom", "Thunderstroms are expected today."),
    ("snow", "Bundle up! It's snowing."),
    ("mist", "It's misty outside."),
    ("fog", "be careful, there's fog outside."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Comfortable,
    Hot,
}

impl TemperatureBand {
    /// Bands for a Celsius value. There is no "pleasant" band: its range
    /// (20 <= t < 3) is empty, so everything from 20 up is `Hot`.
    pub fn classify(celsius: f64) -> Self {
        if celsius < 0.0 {
            Self::Freezing
        } else if celsius < 10.0 {
            Self::Cold
        } else if celsius < 20.0 {
            Self::Comfortable
        } else {
            Self::Hot
        }
    }

    fn message(self, t: f64) -> String {
        match self {
            Self::Freezing => format!("It's freezing at {t}°C! Bundle Up!"),
            Self::Cold => format!("It's quite cold at {t}°C. Wear Warm Clothes!"),
            Self::Comfortable => {
                format!("The Temperature is {t}°C. Comfortable for a light jacket!")
            }
            Self::Hot => format!("It's hot at {t}°C. stay hydreated!"),
        }
    }
}

pub fn temperature_message(temperature: f64, unit: &str) -> String {
    if unit == CELSIUS {
        TemperatureBand::classify(temperature).message(temperature)
    } else {
        format!("{temperature} °{unit}")
    }
}

pub fn condition_message(description: &str) -> String {
    let key = description.to_lowercase();
    CONDITION_MESSAGES
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| description.to_string())
}

/// Night runs from 18:00 to 05:59.
pub fn is_night(hour: u32) -> bool {
    hour >= 18 || hour < 6
}

pub fn location_message(location: &str, hour: u32) -> String {
    let period = if is_night(hour) { "at Night" } else { "During the Day" };
    format!("{location} {period}")
}

pub fn location_message_now(location: &str) -> String {
    location_message(location, Local::now().hour())
}

/// Rendered text for one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub temperature: String,
    pub condition: String,
    pub location: String,
}

impl Presentation {
    pub fn render(reading: &Reading, hour: u32) -> Self {
        Self {
            temperature: temperature_message(reading.temperature, &reading.unit),
            condition: condition_message(&reading.description),
            location: location_message(&reading.location, hour),
        }
    }

    /// Uses the hour at the moment of rendering, not of the lookup.
    pub fn render_now(reading: &Reading) -> Self {
        Self::render(reading, Local::now().hour())
    }
}
