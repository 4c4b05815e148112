//! Generate command handler
//!
//! Collects road-snapped addresses around the configured origin and exports
//! them.

use crate::cli::prompt;
use crate::collect::{CollectionSettings, Collector, ConsoleProgress, Termination};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::{available_formats, export, get_exporter};
use crate::geo::nominatim::NominatimResolver;
use crate::geo::overpass::OverpassSnapper;
use crate::names::BrazilianNames;
use crate::rng::get_source;
use clap::Args;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Origin latitude
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Origin longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Sampling radius in kilometers
    #[arg(long, short = 'r')]
    pub radius_km: Option<f64>,

    /// Number of records to collect
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Road search radius in meters
    #[arg(long)]
    pub road_radius: Option<f64>,

    /// Skip postal address lookup
    #[arg(long)]
    pub no_addresses: bool,

    /// Give up after this many attempts (0 = never)
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Seed for reproducible points and names
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file base name (skips the prompt)
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

impl GenerateArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            config.origin.lat = lat;
            config.origin.lng = lng;
        }
        if let Some(radius_km) = self.radius_km {
            config.origin.radius_km = radius_km;
        }
        if let Some(count) = self.count {
            config.collection.target_count = count;
        }
        if let Some(road_radius) = self.road_radius {
            config.collection.road_search_radius_m = road_radius;
        }
        if self.no_addresses {
            config.collection.resolve_addresses = false;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.collection.max_attempts = max_attempts;
        }
        if let Some(format) = &self.format {
            config.export.format = format.clone();
        }
    }
}

/// Run the generate command
pub async fn run(args: GenerateArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load()?;
    args.apply_to(&mut config);

    let settings = CollectionSettings::from_config(&config)?;
    let exporter = get_exporter(&config.export.format).ok_or_else(|| {
        Error::Config(format!("Unknown format: {}", config.export.format))
    })?;

    let services = &config.services;
    let snapper = OverpassSnapper::new(
        services.overpass_url.as_str(),
        Duration::from_secs(services.overpass_timeout_secs),
        &services.user_agent,
    )?;
    let resolver = NominatimResolver::new(
        services.nominatim_url.as_str(),
        Duration::from_secs(services.nominatim_timeout_secs),
        &services.user_agent,
    )?;
    let rng = get_source(args.seed);

    println!("Generating road-snapped coordinates with formatted addresses...");

    let outcome = Collector::new(&settings, &snapper, &resolver, &BrazilianNames, rng.as_ref())
        .run(&ConsoleProgress)
        .await?;

    if outcome.termination == Termination::Exhausted {
        eprintln!(
            "Stopped after {} attempts with {} of {} records",
            outcome.attempts,
            outcome.records.len(),
            settings.target_count
        );
    }

    let base_name = match args.output {
        Some(name) => name,
        None => prompt::file_base_name(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &config.export.default_file_name,
        )?,
    };

    let path = export(&outcome.records, &base_name, exporter.as_ref())?;
    println!(
        "\nSaved '{}' after {} attempts.",
        path.display(),
        outcome.attempts
    );

    Ok(())
}

/// Print available export formats
fn list_formats() {
    println!("Available export formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> GenerateArgs {
        let mut argv = vec!["roadside", "generate"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        parse(&[]).apply_to(&mut config);

        assert_eq!(config.origin.lat, -20.2235779);
        assert_eq!(config.collection.target_count, 100);
        assert!(config.collection.resolve_addresses);
        assert_eq!(config.export.format, "xlsx");
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        parse(&[
            "--lat", "-19.9", "--lng", "-43.9", "-r", "2", "-n", "3", "--road-radius", "150",
            "--no-addresses", "--max-attempts", "40", "-f", "json",
        ])
        .apply_to(&mut config);

        assert_eq!(config.origin.lat, -19.9);
        assert_eq!(config.origin.lng, -43.9);
        assert_eq!(config.origin.radius_km, 2.0);
        assert_eq!(config.collection.target_count, 3);
        assert_eq!(config.collection.road_search_radius_m, 150.0);
        assert!(!config.collection.resolve_addresses);
        assert_eq!(config.collection.max_attempts, 40);
        assert_eq!(config.export.format, "json");
    }
}
