//! Command-line interface for the `claynova` binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "claynova")]
#[command(about = "Claynova Charm API - runtime configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective configuration after applying environment overrides
    ShowConfig {
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

/// Renders settings as aligned `key: value` lines.
pub fn render_text(settings: &Settings) -> String {
    format!(
        "project_name:    {}\napi_prefix:      {}\nallowed_origins: {}\n",
        settings.project_name,
        settings.api_prefix,
        settings.allowed_origins.join(", ")
    )
}

/// Renders settings as pretty-printed JSON.
pub fn render_json(settings: &Settings) -> Result<String> {
    serde_json::to_string_pretty(settings).context("Failed to serialize settings")
}
