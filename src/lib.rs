//! Core library surface for the University Portal TUI application.
//!
//! The portal is a read-only projection layer: a [`Dataset`] snapshot goes in,
//! the `views` functions shape it for each page, and every user action leaves
//! as an [`Intent`] for an [`IntentSink`] to carry out.
pub mod config;
pub mod data;
pub mod error;
pub mod intents;
pub mod logging;
pub mod models;
pub mod ui;
pub mod views;

/// Bootstrapping helpers used by `main.rs`.
pub use config::{data_dir, Config};
pub use data::{audit, builtin_dataset, load_dataset, Finding, Source};
pub use logging::init_logging;

pub use error::{DataError, IntentError};
pub use intents::{Intent, IntentLog, IntentSink};
pub use models::{Dataset, Role};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
