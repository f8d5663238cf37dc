use anyhow::{Context, anyhow};
use carousel_core::{Carousel, Config, FetchError, OpenMeteoProvider, fetch_weather, provider_from_config};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use std::path::PathBuf;

use crate::render;

const RESUME: &str = ":resume";
const QUIT: &str = ":quit";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Weather carousel")]
pub struct Cli {
    /// Read and write configuration at this path instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log lookups and errors to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a city once and show the carousel facing its weather.
    Show {
        /// City name; falls back to the configured default city.
        city: Option<String>,
    },

    /// Prompt for cities repeatedly; `:resume` sets the ring spinning again.
    Interactive,

    /// Set the default city and API endpoints.
    Configure,

    /// List the cards in ring order.
    Categories,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { ref city } => {
                let config = self.load_config()?;
                let provider = provider_from_config(&config)?;
                let city = city.clone().or(config.default_city).unwrap_or_default();
                show(&provider, &city).await
            }
            Command::Interactive => {
                let config = self.load_config()?;
                let provider = provider_from_config(&config)?;
                interactive(&provider).await
            }
            Command::Configure => self.configure(),
            Command::Categories => {
                print!("{}", render::categories());
                Ok(())
            }
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    fn configure(&self) -> anyhow::Result<()> {
        let mut config = self.load_config()?;

        let city = Text::new("Default city:")
            .with_initial_value(config.default_city.as_deref().unwrap_or_default())
            .with_help_message("Leave blank to always pass a city to `carousel show`")
            .prompt()
            .context("Failed to read default city")?;
        config.set_default_city(&city);

        config.endpoints.geocoding = Text::new("Geocoding endpoint:")
            .with_initial_value(&config.endpoints.geocoding)
            .prompt()
            .context("Failed to read geocoding endpoint")?;

        config.endpoints.forecast = Text::new("Forecast endpoint:")
            .with_initial_value(&config.endpoints.forecast)
            .prompt()
            .context("Failed to read forecast endpoint")?;

        // Reject endpoints that would fail on every lookup.
        provider_from_config(&config)?;

        let path = match &self.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };

        println!("Saved configuration to {}", path.display());
        Ok(())
    }
}

async fn show(provider: &OpenMeteoProvider, city: &str) -> anyhow::Result<()> {
    let mut carousel = Carousel::new();

    match fetch_weather(city, provider, provider, &mut carousel).await {
        Ok(_) => {
            print!("{}", render::carousel(&carousel));
            Ok(())
        }
        Err(FetchError::EmptyInput) => Err(anyhow!(
            "{}\nHint: pass a city or run `carousel configure` to set a default.",
            FetchError::EmptyInput.user_message()
        )),
        Err(e) => Err(anyhow!(e.user_message())),
    }
}

async fn interactive(provider: &OpenMeteoProvider) -> anyhow::Result<()> {
    let mut carousel = Carousel::new();
    print!("{}", render::carousel(&carousel));

    loop {
        let input = match Text::new("City:")
            .with_placeholder("Enter city...")
            .with_help_message(&format!("{RESUME} to spin again, {QUIT} or Esc to exit"))
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        match input.trim() {
            QUIT => break,
            RESUME => {
                carousel.resume();
            }
            city => {
                if let Err(e) = fetch_weather(city, provider, provider, &mut carousel).await {
                    eprintln!("{}", e.user_message());
                    continue;
                }
            }
        }

        print!("{}", render::carousel(&carousel));
    }

    Ok(())
}
