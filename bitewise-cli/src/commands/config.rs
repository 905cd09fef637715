//! Configuration inspection.

use crate::cli::ConfigAction;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};
use bitewise_core::AppConfig;
use serde::Serialize;
use std::io::Write;

/// Effective configuration payload for `config show`.
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// The effective configuration (file + env overrides + defaults).
    #[serde(flatten)]
    pub config: AppConfig,
}

impl Render for ConfigReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        let rendered = toml::to_string_pretty(&self.config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write!(w, "{rendered}")
    }
}

/// Handle the `config` subcommand.
pub fn run(action: &ConfigAction, config: &AppConfig, writer: &OutputWriter) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            let report = ConfigReport {
                config: config.clone(),
            };
            writer.render(&report)
        }
        ConfigAction::Path => {
            let path = AppConfig::config_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
