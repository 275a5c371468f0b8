//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log files (default "./logs")
//! - LOG_MAX_SIZE: size in bytes after which a new file index is started (default 1 GiB)

use chrono::Utc;
use eyre::{eyre, Result, WrapErr};
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, OpenOptions},
    path::Path,
};

const LOG_FILE_NAME: &str = "cats.log";
const DEFAULT_LOG_MAX_SIZE: u64 = 1_073_741_824;

/// Computes the path of the rolled log file given the base file path and the date string.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    let stem = base_file_path
        .strip_suffix(".log")
        .unwrap_or(base_file_path);
    format!("{}-{}.{}.log", stem, date_str, index)
}

/// Generates a time-based log file name.
pub fn time_based_rolling(base_file_path: &str, date_str: &str, index: u32) -> String {
    compute_rolled_file_path(base_file_path, date_str, index)
}

/// Starting from `file_path`, picks the first rolled file that is still under
/// `max_size` bytes (or does not exist yet).
pub fn space_based_rolling(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut final_path = file_path.to_string();
    // The first rolled file was already checked when it is the starting point.
    let mut index = if file_path == compute_rolled_file_path(base_file_path, date_str, 1) {
        2
    } else {
        1
    };
    while let Ok(metadata) = metadata(&final_path) {
        if metadata.len() <= max_size {
            break;
        }
        final_path = compute_rolled_file_path(base_file_path, date_str, index);
        index += 1;
    }
    final_path
}

/// Maps a `LOG_LEVEL` value to a filter, defaulting to `Info`.
pub fn parse_level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Resolves the log file for today, creating its directory.
pub fn prepare_log_file(log_dir: &str, max_size: u64) -> Result<String> {
    let log_dir = format!("{}/", log_dir.trim_end_matches('/'));
    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let base_file_path = format!("{}{}", log_dir, LOG_FILE_NAME);

    let time_based_path = time_based_rolling(&base_file_path, &date_str, 1);
    if let Some(parent) = Path::new(&time_based_path).parent() {
        create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    Ok(space_based_rolling(
        &time_based_path,
        &base_file_path,
        &date_str,
        max_size,
    ))
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() -> Result<()> {
    let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());
    let level_filter = parse_level_filter(
        &env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
    );

    if log_mode.eq_ignore_ascii_case("file") {
        let log_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string());
        let max_size = match env::var("LOG_MAX_SIZE") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| eyre!("LOG_MAX_SIZE must be a valid u64 if set"))?,
            Err(_) => DEFAULT_LOG_MAX_SIZE,
        };

        let final_path = prepare_log_file(&log_dir, max_size)?;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&final_path)
            .wrap_err_with(|| format!("Unable to open log file {}", final_path))?;

        WriteLogger::init(level_filter, Config::default(), log_file)
            .wrap_err("Failed to initialize file logger")?;
    } else {
        SimpleLogger::init(level_filter, Config::default())
            .wrap_err("Failed to initialize stdout logger")?;
    }

    info!("Logging is successfully configured (mode: {})", log_mode);
    Ok(())
}
