//! Binary entry point: resolve the data directory, read settings, start the
//! log file, load the dataset and drive the Ratatui event loop until the user
//! exits.
use anyhow::Context;
use university_portal::{
    audit, data_dir, init_logging, load_dataset, run_app, App, Config, IntentLog,
};

fn main() -> anyhow::Result<()> {
    let dir = data_dir()?;
    let config = Config::load(&dir).context("failed to load settings")?;
    let log_path = init_logging(&dir, &config.log_level)?;
    log::info!("logging to {}", log_path.display());

    let (data, source) = load_dataset(&dir).context("failed to load dataset")?;
    for finding in audit(&data) {
        log::warn!("dataset: {finding}");
    }

    let mut app = App::new(data, config, source, Box::new(IntentLog::new()));
    run_app(&mut app)
}
