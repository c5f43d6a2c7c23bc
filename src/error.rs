//! Error types for loading the movie catalog

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The database file does not exist
    #[error("Movie database not found: {0}")]
    Missing(PathBuf),

    /// Opening or querying the SQLite file failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
