//! Full-screen terminal front end: mode switch, selection lists, result charts.

pub mod app;
pub mod app_logic;
pub mod events;
pub mod models;
pub mod rendering;
pub mod utils;

pub use app::App;
pub use events::{handle_key, run_tui};
