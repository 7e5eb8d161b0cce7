use anyhow::Result;
use clap::Parser;
use claynova::cli::{Cli, Commands, render_json, render_text};
use claynova::config::Settings;
use claynova::state::AppState;
use claynova_observability::init_console_logging;
use dotenvy::dotenv;
use tracing::info;

fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    if let Some(Commands::ShowConfig { json }) = cli.command {
        let settings = Settings::from_env();
        let output = if json {
            render_json(&settings)?
        } else {
            render_text(&settings)
        };
        println!("{}", output.trim_end());
        return Ok(());
    }

    init_console_logging()?;

    let state = AppState::from_env();
    let settings = state.settings();

    info!(
        project_name = %settings.project_name,
        api_prefix = %settings.api_prefix,
        allowed_origins = ?settings.allowed_origins,
        "Configuration loaded"
    );

    Ok(())
}
