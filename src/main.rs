//! Binary entrypoint kept minimal. Argument handling lives in `args`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use sportify_merch::args::{Args, determine_log_level, process_args};
use sportify_merch::config;

/// Local-time log timestamps, `YYYY-MM-DD-T HH:MM:SS`.
struct MerchTimer;

impl tracing_subscriber::fmt::time::FormatTime for MerchTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
/// - `config_dir`: Base directory whose `logs/` subdirectory receives the log file
///
/// Output:
/// - Logs go to `logs/sportify-merch.log`; stderr is used if the file cannot be opened.
fn init_logging(level: &str, config_dir: &std::path::Path) {
    let mut log_path = config::logs_dir(config_dir);
    log_path.push("sportify-merch.log");
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(MerchTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_timer(MerchTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config_dir = config::resolve_config_dir(args.config_dir.as_deref());
    init_logging(&determine_log_level(&args), &config_dir);

    tracing::info!("sportify-merch starting");
    let code = match process_args(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    };
    tracing::info!("sportify-merch exited");
    code
}
