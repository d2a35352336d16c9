//! File-backed logging. The terminal belongs to the TUI, so everything goes to
//! a timestamped file under `<data dir>/logs/` instead of stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

const LOG_DIR_NAME: &str = "logs";

/// Install the global logger and return the path of the file it writes to.
///
/// `default_level` applies to this crate only; other crates stay at `warn`.
/// `RUST_LOG` still wins when it is set.
pub fn init_logging(data_dir: &Path, default_level: &str) -> Result<PathBuf> {
    let log_dir = data_dir.join(LOG_DIR_NAME);
    fs::create_dir_all(&log_dir).context("failed to create log directory")?;

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let log_path = log_dir.join(format!("portal-{stamp}.log"));
    let log_file = File::create(&log_path).context("failed to create log file")?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("university_portal", parse_level(default_level))
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("failed to install logger")?;

    Ok(log_path)
}

fn parse_level(raw: &str) -> LevelFilter {
    raw.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_is_lenient() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }
}
