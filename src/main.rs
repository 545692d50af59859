mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, Command};
use ftc_events::config::Config;
use ftc_events::error::AppError;
use ftc_events::FtcClient;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration commands work on the raw file and need no logging
    if args.command.is_config_command() {
        return match &args.command {
            Command::Config(update) => commands::handle_config_update_command(update).await,
            _ => commands::handle_list_config_command().await,
        };
    }

    let config = Config::load_unvalidated().await?;
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let mut client = FtcClient::new(config)?;
    if let Some(server) = &args.server {
        client.set_server(server.as_str());
    }

    if let Err(e) = commands::handle_api_command(&client, &args.command).await {
        tracing::error!("Command failed: {e}");
        return Err(e);
    }

    Ok(())
}
