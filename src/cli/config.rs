//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "origin.radius_km")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            print!("{}", render_config(&config));
        }

        // Key only: show that value
        (Some(key), None) => {
            println!("{}", lookup(&config, key)?);
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

/// Current value of `key`, or an error listing the valid keys
fn lookup(config: &Config, key: &str) -> Result<String> {
    config.get(key).ok_or_else(|| {
        Error::Config(format!(
            "Unknown config key: {}\n\nAvailable keys:\n  {}",
            key,
            Config::available_keys().join("\n  ")
        ))
    })
}

/// Render every key as `section.key = value`, grouped by section
fn render_config(config: &Config) -> String {
    let mut output = String::new();
    let mut section = "";

    for key in Config::available_keys() {
        let (key_section, name) = key.split_once('.').unwrap_or(("", key));
        if key_section != section {
            if !section.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("[{}]\n", key_section));
            section = key_section;
        }
        let value = config.get(key).unwrap_or_default();
        output.push_str(&format!("{} = {}\n", name, value));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config() {
        let rendered = render_config(&Config::default());

        assert!(rendered.starts_with("[origin]\nlat = -20.2235779\n"));
        assert!(rendered.contains("\n\n[collection]\ntarget_count = 100\n"));
        assert!(rendered.contains("[services]\n"));
        assert!(rendered.contains("pause_ms = 1000\n"));
        assert!(rendered.ends_with("format = xlsx\n"));
    }

    #[test]
    fn test_lookup_known_key() {
        let value = lookup(&Config::default(), "collection.target_count").unwrap();
        assert_eq!(value, "100");
    }

    #[test]
    fn test_lookup_unknown_key_is_config_error() {
        let err = lookup(&Config::default(), "origin.altitude").unwrap_err();
        match err {
            Error::Config(message) => {
                assert!(message.contains("origin.altitude"));
                assert!(message.contains("origin.radius_km"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
