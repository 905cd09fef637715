//! CLI argument parsing using clap derive API.
//!
//! This module defines the command-line interface structure using clap's
//! derive macros. It is purely declarative with no side effects or I/O.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Bitewise -- dietary suitability checker for packaged food.
///
/// Use `bitewise <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "bitewise", version, about, long_about = None)]
pub struct Cli {
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a product by barcode and print its dietary report.
    Lookup(LookupArgs),

    /// Run a scan session and report the first product decoded.
    Scan(ScanArgs),

    /// Evaluate raw ingredients text against the dietary rules, offline.
    Classify(ClassifyArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- lookup ----

/// Look up a single barcode against the remote catalog.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Product barcode (one or more digits).
    pub barcode: String,
}

// ---- scan ----

/// Run a capture session until a valid barcode is decoded.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Capture device identifier (overrides the configured device).
    #[arg(long)]
    pub device: Option<String>,
}

// ---- classify ----

/// Classify an ingredients list without any catalog lookup.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Free-form ingredients text, e.g. "water, sugar, gelatin".
    pub ingredients: String,
}

// ---- config ----

/// Manage bitewise configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration (file + env overrides + defaults).
    Show,
    /// Print the configuration file path.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_lookup() {
        let args = Cli::try_parse_from(["bitewise", "lookup", "5449000000996"]);
        assert!(args.is_ok(), "should parse 'lookup' subcommand");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Lookup(lookup_args) => {
                assert_eq!(lookup_args.barcode, "5449000000996");
            }
            _ => panic!("expected Lookup command"),
        }
    }

    #[test]
    fn test_cli_parse_lookup_requires_barcode() {
        let args = Cli::try_parse_from(["bitewise", "lookup"]);
        assert!(args.is_err(), "should fail without a barcode");
    }

    #[test]
    fn test_cli_parse_scan_defaults() {
        let args = Cli::try_parse_from(["bitewise", "scan"]);
        assert!(args.is_ok(), "should parse 'scan' subcommand");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Scan(scan_args) => {
                assert!(scan_args.device.is_none(), "device should default to None");
            }
            _ => panic!("expected Scan command"),
        }
    }

    #[test]
    fn test_cli_parse_scan_with_device() {
        let args = Cli::try_parse_from(["bitewise", "scan", "--device", "wedge0"]);
        assert!(args.is_ok(), "should parse scan with device");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Scan(scan_args) => {
                assert_eq!(scan_args.device, Some("wedge0".to_owned()));
            }
            _ => panic!("expected Scan command"),
        }
    }

    #[test]
    fn test_cli_parse_classify() {
        let args = Cli::try_parse_from(["bitewise", "classify", "water, gelatin"]);
        assert!(args.is_ok(), "should parse 'classify' subcommand");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Classify(classify_args) => {
                assert_eq!(classify_args.ingredients, "water, gelatin");
            }
            _ => panic!("expected Classify command"),
        }
    }

    #[test]
    fn test_cli_parse_config_show() {
        let args = Cli::try_parse_from(["bitewise", "config", "show"]);
        assert!(args.is_ok(), "should parse 'config show' subcommand");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Config(config_args) => match config_args.action {
                ConfigAction::Show => {}
                ConfigAction::Path => panic!("expected Show action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_cli_parse_output_format_json() {
        let args = Cli::try_parse_from(["bitewise", "--output", "json", "lookup", "1"]);
        assert!(args.is_ok(), "should parse with json output format");
        let cli = args.expect("parse succeeded");
        match cli.output {
            OutputFormat::Json => {}
            OutputFormat::Text => panic!("expected Json output format"),
        }
    }

    #[test]
    fn test_cli_parse_log_level() {
        let args = Cli::try_parse_from(["bitewise", "--log-level", "debug", "scan"]);
        assert!(args.is_ok(), "should parse with custom log level");
        let cli = args.expect("parse succeeded");
        assert_eq!(cli.log_level, Some("debug".to_owned()));
    }

    #[test]
    fn test_cli_parse_invalid_command_fails() {
        let args = Cli::try_parse_from(["bitewise", "frobnicate"]);
        assert!(args.is_err(), "should fail on invalid command");
    }

    #[test]
    fn test_cli_parse_missing_command_fails() {
        let args = Cli::try_parse_from(["bitewise"]);
        assert!(args.is_err(), "should fail when no command provided");
    }

    #[test]
    fn test_cli_verify_command_structure() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "bitewise");

        let subcommands: Vec<_> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        assert!(subcommands.contains(&"lookup"), "should have 'lookup'");
        assert!(subcommands.contains(&"scan"), "should have 'scan'");
        assert!(subcommands.contains(&"classify"), "should have 'classify'");
        assert!(subcommands.contains(&"config"), "should have 'config'");
    }
}
