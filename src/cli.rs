//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;

/// CF application inventory exporter
#[derive(Parser, Debug)]
#[command(name = "cfdump")]
#[command(version)]
#[command(about = "Export a CF application inventory snapshot to CSV", long_about = None)]
pub struct Cli {
    /// Path to the endpoint configuration file
    #[arg(short, long, default_value = defaults::CONFIG_PATH)]
    pub config: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["cfdump"]);
        assert_eq!(cli.config, PathBuf::from(defaults::CONFIG_PATH));
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
    }

    #[test]
    fn test_cli_with_config_path() {
        let cli = Cli::parse_from(["cfdump", "-c", "/etc/cfdump/config.yml"]);
        assert_eq!(cli.config, PathBuf::from("/etc/cfdump/config.yml"));
    }

    #[test]
    fn test_cli_with_log_level() {
        let cli = Cli::parse_from(["cfdump", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");
    }
}
