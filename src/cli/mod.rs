//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod generate;
pub mod prompt;

use clap::{Parser, Subcommand};

/// Synthetic road-snapped address generator
#[derive(Parser)]
#[command(name = "roadside")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect road-snapped addresses and export them
    Generate(generate::GenerateArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "roadside", "generate", "-n", "3", "--radius-km", "2.5", "--no-addresses", "-o", "out",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.count, Some(3));
        assert_eq!(args.radius_km, Some(2.5));
        assert!(args.no_addresses);
        assert_eq!(args.output.as_deref(), Some("out"));
    }

    #[test]
    fn test_lat_requires_lng() {
        assert!(Cli::try_parse_from(["roadside", "generate", "--lat", "-20.2"]).is_err());
        assert!(Cli::try_parse_from([
            "roadside", "generate", "--lat", "-20.2", "--lng", "-40.2"
        ])
        .is_ok());
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["roadside", "config", "origin.radius_km", "3"]).unwrap();
        let Commands::Config(args) = cli.command else {
            panic!("expected config");
        };
        assert_eq!(args.key.as_deref(), Some("origin.radius_km"));
        assert_eq!(args.value.as_deref(), Some("3"));
    }
}
