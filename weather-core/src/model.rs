/// Unit tag stored on every reading produced by a lookup.
pub const CELSIUS: &str = "C";

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    /// Trimmed, non-empty location query.
    pub location: String,
}

impl WeatherRequest {
    /// Build a request from raw user input, or `None` if it is blank.
    pub fn from_input(input: &str) -> Option<Self> {
        let location = input.trim();
        if location.is_empty() {
            None
        } else {
            Some(Self { location: location.to_string() })
        }
    }
}

/// Result of one successful weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub description: String,
    pub location: String,
    pub unit: String,
}

impl Reading {
    pub fn celsius(temperature: f64, description: String, location: String) -> Self {
        Self { temperature, description, location, unit: CELSIUS.to_string() }
    }
}
