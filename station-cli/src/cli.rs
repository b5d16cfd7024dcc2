use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::Text;
use tracing::info;

use station_core::{Config, ConsoleDisplay, EmojiDisplay, WeatherStation, normalize, source_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-station", version, about = "Current weather fanned out to terminal displays")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name; prompted for interactively when absent.
        city: Option<String>,
    },

    /// Set the default city used when `show` gets no argument.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command.unwrap_or(Command::Show { city: None }) {
            Command::Show { city } => show(city).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(city: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let city = match city.or_else(|| config.default_city.clone()) {
        Some(city) => city,
        None => Text::new("Enter city name:").prompt()?.trim().to_string(),
    };

    let source = source_from_config(&config);

    let mut station = WeatherStation::new();
    station.register(ConsoleDisplay::new());
    station.register(EmojiDisplay::new());

    let payload = source.fetch_current(&city).await?;
    let reading = normalize(&payload, &city)?;

    station.broadcast(&reading);
    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let mut prompt = Text::new("Default city:");
    if let Some(current) = config.default_city.as_deref() {
        prompt = prompt.with_initial_value(current);
    }

    let input = prompt.prompt()?;
    config.set_default_city(&input);
    config.save()?;

    info!("configuration written to {}", Config::config_file_path()?.display());
    match &config.default_city {
        Some(city) => println!("Default city set to '{city}'."),
        None => println!("Default city cleared."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_accepts_a_positional_city() {
        let cli = Cli::try_parse_from(["weather-station", "show", "London"]).unwrap();

        match cli.command {
            Some(Command::Show { city }) => assert_eq!(city.as_deref(), Some("London")),
            other => panic!("expected show command, got {other:?}"),
        }
    }

    #[test]
    fn bare_invocation_defaults_to_interactive_show() {
        let cli = Cli::try_parse_from(["weather-station"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn configure_subcommand_parses() {
        let cli = Cli::try_parse_from(["weather-station", "configure"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Configure)));
    }
}
