use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::{DEFAULT_END, DEFAULT_SEED, DEFAULT_START};

/// Default output location for the generated dataset
pub const DEFAULT_OUTPUT: &str = "data/liquor_sales.csv";

#[derive(Parser, Debug)]
#[command(name = "liquor-sales-gen")]
#[command(version, about = "Generate a synthetic liquor store sales dataset")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate every day and branch and write the dataset as CSV
    Generate {
        /// Output CSV path
        #[arg(default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Seed shared by both random sources
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// First simulated day (YYYY-MM-DD)
        #[arg(long, default_value_t = DEFAULT_START)]
        start: NaiveDate,

        /// Last simulated day, inclusive (YYYY-MM-DD)
        #[arg(long, default_value_t = DEFAULT_END)]
        end: NaiveDate,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// List catalog products with their base prices
    Catalog,

    /// List branches and their zones
    Branches,

    /// List special events and the dates they fall on
    Events,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;

    fn config_of(command: Commands) -> GeneratorConfig {
        match command {
            Commands::Generate {
                seed, start, end, ..
            } => GeneratorConfig { seed, start, end },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["liquor-sales-gen", "generate"]).unwrap();
        match &cli.command {
            Commands::Generate { output, quiet, .. } => {
                assert_eq!(output, &PathBuf::from(DEFAULT_OUTPUT));
                assert!(!quiet);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let config = config_of(cli.command);
        let defaults = GeneratorConfig::default();
        assert_eq!(config.seed, defaults.seed);
        assert_eq!(config.start, defaults.start);
        assert_eq!(config.end, defaults.end);
    }

    #[test]
    fn test_generate_overrides() {
        let cli = Cli::try_parse_from([
            "liquor-sales-gen",
            "generate",
            "out.csv",
            "--seed",
            "7",
            "--start",
            "2023-01-01",
            "--end",
            "2023-03-31",
            "-q",
        ])
        .unwrap();
        let config = config_of(cli.command);
        assert_eq!(config.seed, 7);
        assert_eq!(config.day_count(), 90);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let args = ["liquor-sales-gen", "generate", "--start", "2023-13-01"];
        let result = Cli::try_parse_from(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_listing_commands() {
        let cli = Cli::try_parse_from(["liquor-sales-gen", "events"]).unwrap();
        assert!(matches!(cli.command, Commands::Events));
        assert!(Cli::try_parse_from(["liquor-sales-gen", "unknown"]).is_err());
    }
}
