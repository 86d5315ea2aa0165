//! Command-line argument parsing for the querybar driver
//!
//! Supports:
//! - An explicit config file (otherwise `~/.config/querybar/config.yaml`)
//! - A suggestion list (otherwise `~/.config/querybar/suggestions.yaml` if present)
//! - Reading directives from a script file instead of stdin
//! - Printing the query model as JSON after each line

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigError, QueryConfig};
use crate::suggest::{StaticSuggestions, SuggestionError};

/// Build a boolean query from typed text
#[derive(Parser, Debug)]
#[command(
    name = "querybar",
    version,
    about = "Build a boolean query from typed text"
)]
pub struct CliArgs {
    /// Script of directives to run (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of the user config
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suggestion list (YAML, or JSON by extension)
    #[arg(short = 's', long, value_name = "FILE")]
    pub suggestions: Option<PathBuf>,

    /// Print the query model as JSON after each line
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// An explicit config path must load; the user config falls back to defaults
    pub fn load_config(&self) -> Result<QueryConfig, ConfigError> {
        match &self.config {
            Some(path) => QueryConfig::load_from(path),
            None => Ok(QueryConfig::load()),
        }
    }

    /// An explicit suggestion file must load; the user file is optional
    pub fn load_suggestions(&self) -> Result<StaticSuggestions, SuggestionError> {
        if let Some(path) = &self.suggestions {
            return StaticSuggestions::load(path);
        }

        match crate::config_paths::suggestions_file() {
            Some(path) if path.exists() => StaticSuggestions::load(&path).or_else(|e| {
                tracing::warn!("Ignoring suggestions at {}: {}", path.display(), e);
                Ok(StaticSuggestions::default())
            }),
            _ => Ok(StaticSuggestions::default()),
        }
    }
}
