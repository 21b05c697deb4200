use std::path::PathBuf;

use clap::Parser;

use crate::queries::InsightThresholds;

pub const DEFAULT_DATA_DIR: &str = ".data";
pub const DEFAULT_DATA_FILE: &str = "contacts.json";
pub const LOG_ENV: &str = "RAPPORT_LOG";

/// Rapport - personal contact and relationship tracker
#[derive(Debug, Parser)]
#[command(name = "rapport", version, about)]
pub struct Args {
    /// Contact file path (default: .data/contacts.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Import contacts from a legacy id,name,phone,email,company CSV file
    #[arg(long, value_name = "CSV_PATH", conflicts_with = "export_csv")]
    pub import_csv: Option<PathBuf>,

    /// Export contacts to a legacy id,name,phone,email,company CSV file
    #[arg(long, value_name = "CSV_PATH")]
    pub export_csv: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub import_csv: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
    pub log_filter: String,
    pub thresholds: InsightThresholds,
}

impl Config {
    /// Resolves parsed arguments and the log environment variable.
    pub fn from_args(args: Args, log_env: Option<String>) -> Self {
        let data_file = args
            .file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_DATA_FILE));

        let log_filter = log_env
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| default_log_filter(args.verbose).to_string());

        Self {
            data_file,
            import_csv: args.import_csv,
            export_csv: args.export_csv,
            log_filter,
            thresholds: InsightThresholds::default(),
        }
    }

    pub fn load() -> Self {
        Self::from_args(Args::parse(), std::env::var(LOG_ENV).ok())
    }
}

fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rapport").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_data_dir() {
        let config = Config::from_args(parse(&[]), None);
        assert_eq!(config.data_file, PathBuf::from(".data").join("contacts.json"));
        assert_eq!(config.log_filter, "warn");
        assert!(config.import_csv.is_none());
    }

    #[test]
    fn file_flag_overrides_default() {
        let config = Config::from_args(parse(&["-f", "/tmp/people.json"]), None);
        assert_eq!(config.data_file, PathBuf::from("/tmp/people.json"));
    }

    #[test]
    fn verbosity_and_env_filter() {
        assert_eq!(Config::from_args(parse(&["-vv"]), None).log_filter, "debug");
        let config = Config::from_args(parse(&["-v"]), Some("rapport=trace".into()));
        assert_eq!(config.log_filter, "rapport=trace");
    }

    #[test]
    fn import_and_export_conflict() {
        let result = Args::try_parse_from(["rapport", "--import-csv", "a.csv", "--export-csv", "b.csv"]);
        assert!(result.is_err());
    }
}
