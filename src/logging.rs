use crate::cli::Args;
use ftc_events::config::Config;
use ftc_events::constants::LOG_FILE_NAME;
use ftc_events::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn env_filter(default_directive: &str) -> Result<EnvFilter, AppError> {
    let directive = default_directive
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits the configured log file path into directory and file name.
/// `--log-file` wins over the config file; without either the default log
/// directory is used.
fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging for the binary.
///
/// - Always logs to a daily rolling file
/// - With `--debug`, also logs to stderr at debug level so stdout stays
///   clean JSON
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = if args.debug {
        Some(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_ansi(true)
                .with_filter(env_filter("ftc_events=debug")?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter("ftc_events=info")?),
        )
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
