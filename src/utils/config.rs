// src/utils/config.rs
use std::path::PathBuf;

/// Environment variable naming the CSV output directory.
pub const CSV_DIRECTORY_ENV: &str = "CSV_DIRECTORY";

/// Picks the output directory: explicit flag, then a non-empty `CSV_DIRECTORY`,
/// then the current directory.
pub fn resolve_output_dir(cli_dir: Option<PathBuf>, env_dir: Option<String>) -> PathBuf {
    if let Some(dir) = cli_dir {
        return dir;
    }
    match env_dir {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("."),
    }
}

/// Reads `CSV_DIRECTORY` from the process environment (after `.env` has been loaded).
pub fn output_dir_from_env(cli_dir: Option<PathBuf>) -> PathBuf {
    resolve_output_dir(cli_dir, std::env::var(CSV_DIRECTORY_ENV).ok())
}
