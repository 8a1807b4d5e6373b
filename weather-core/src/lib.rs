//! Core library for the weather widget.
//!
//! This crate defines:
//! - The request controller that turns typed input into a lookup status
//! - The WeatherAPI.com provider behind a small async trait
//! - The classifier that renders a reading as human-readable text
//! - Configuration & credentials handling
//!
//! It is used by `weather-widget-cli`, but can also back other front ends.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod widget;

pub use classify::Presentation;
pub use config::Config;
pub use error::WeatherError;
pub use model::{Reading, WeatherRequest};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use widget::{Status, WeatherWidget};
