//! Ratatui front-end. `App` owns all view state (role, page, filters and the
//! open dialog) and feeds it into the pure projections on every frame.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
