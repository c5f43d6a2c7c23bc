pub mod catalog;
pub mod config;
pub mod error;
pub mod options;
pub mod presenter;
pub mod search;
pub mod tui;
