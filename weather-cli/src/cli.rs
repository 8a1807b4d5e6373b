use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::error::InquireResult;
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_widget_core::{Config, WeatherWidget, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show the current weather for a city.
    Show {
        /// City or location name.
        city: String,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let mut widget = build_widget()?;
                widget.set_input(city);
                render::submit_and_print(&mut widget).await;
                Ok(())
            }
            Command::Interactive => interactive(build_widget()?).await,
        }
    }
}

pub fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_widget() -> anyhow::Result<WeatherWidget> {
    let config = Config::load_with_env()?;
    debug!(base_url = config.resolved_base_url(), "Resolved weather provider");
    let provider = provider_from_config(&config)?;
    Ok(WeatherWidget::new(provider))
}

fn configure() -> anyhow::Result<()> {
    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn interactive(mut widget: WeatherWidget) -> anyhow::Result<()> {
    loop {
        let prompt = tokio::task::spawn_blocking(|| {
            Text::new("City:").with_placeholder("Enter a City Name").prompt()
        });
        let Some(city) = city_from_prompt(prompt.await.context("City prompt panicked")?)? else {
            debug!("City prompt closed");
            break;
        };

        widget.set_input(city);
        render::submit_and_print(&mut widget).await;
    }

    Ok(())
}

/// `None` when the user closed the prompt with Esc or Ctrl-C.
fn city_from_prompt(result: InquireResult<String>) -> anyhow::Result<Option<String>> {
    match result {
        Ok(city) => Ok(Some(city)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read city"),
    }
}
