//! Dataset access split across logical submodules: the built-in fixture, the
//! optional on-disk override, and consistency checks over whichever was loaded.

mod audit;
mod fixture;
mod loader;

pub use audit::{audit, Finding};
pub use fixture::builtin_dataset;
pub use loader::{load_dataset, Source};
