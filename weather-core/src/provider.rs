use crate::{Config, Reading, WeatherError, WeatherRequest, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetch current conditions for `request.location`.
    async fn current(&self, request: &WeatherRequest) -> Result<Reading, WeatherError>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    Ok(Box::new(WeatherApiProvider::with_base_url(
        api_key.to_owned(),
        config.resolved_base_url(),
    )))
}
