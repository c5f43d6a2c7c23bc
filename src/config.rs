use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

pub const DEFAULT_DATABASE: &str = "moviesDB.db";
pub const DEFAULT_TABLE: &str = "movies";
pub const LOG_FILE_NAME: &str = "movie-finder.log";

#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub database_path: PathBuf,
    pub table: String,
    pub log_path: PathBuf,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            table: DEFAULT_TABLE.to_string(),
            log_path: std::env::temp_dir().join(LOG_FILE_NAME),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    database_path: Option<PathBuf>,
    table: Option<String>,
    log_path: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.log_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> Result<FinderConfig> {
        let defaults = FinderConfig::default();

        // The table name is spliced into the SELECT, so only plain identifiers pass.
        let table = self.table.unwrap_or(defaults.table);
        if !is_plain_identifier(&table) {
            return Err(CatalogError::InvalidConfig(format!(
                "table name '{}' is not a plain identifier",
                table
            )));
        }

        Ok(FinderConfig {
            database_path: self.database_path.unwrap_or(defaults.database_path),
            table,
            log_path: self.log_path.unwrap_or(defaults.log_path),
        })
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
