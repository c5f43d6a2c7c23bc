//! In-memory movie catalog and the one-time SQLite load that fills it.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, FromRow};
use tracing::{debug, info, warn};

use crate::config::FinderConfig;
use crate::error::{CatalogError, Result};

/// Separator used by the actor and genre columns.
pub const FIELD_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
    /// Comma-delimited actor names exactly as stored in the database
    pub actors: String,
    /// Comma-delimited genre names exactly as stored in the database
    pub genres: String,
    pub imdb_rating: Option<f64>,
    pub meta_score: Option<f64>,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        actors: impl Into<String>,
        genres: impl Into<String>,
        imdb_rating: Option<f64>,
        meta_score: Option<f64>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            actors: actors.into(),
            genres: genres.into(),
            imdb_rating,
            meta_score,
        }
    }

    pub fn actor_names(&self) -> impl Iterator<Item = &str> {
        split_field(&self.actors)
    }

    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        split_field(&self.genres)
    }
}

fn split_field(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(FIELD_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, FromRow)]
struct MovieRow {
    title: Option<String>,
    director: Option<String>,
    actors: Option<String>,
    genres: Option<String>,
    imdb_rating: Option<f64>,
    meta_score: Option<f64>,
}

impl MovieRow {
    fn into_record(self) -> Option<MovieRecord> {
        Some(MovieRecord {
            title: self.title?,
            director: self.director?,
            actors: self.actors?,
            genres: self.genres?,
            imdb_rating: self.imdb_rating,
            meta_score: self.meta_score,
        })
    }
}

/// Reads every row of the configured table. The file is opened read-only and
/// never created; any failure aborts the whole load.
pub async fn load_catalog(config: &FinderConfig) -> Result<Catalog> {
    if !config.database_path.is_file() {
        return Err(CatalogError::Missing(config.database_path.clone()));
    }

    info!("Loading movie catalog from {:?}", config.database_path);

    let mut conn = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .read_only(true)
        .create_if_missing(false)
        .connect()
        .await?;

    let sql = format!(
        "SELECT Series_Title AS title, \
                Director AS director, \
                Actors AS actors, \
                Genre AS genres, \
                CAST(IMDB_Rating AS REAL) AS imdb_rating, \
                CAST(Meta_score AS REAL) AS meta_score \
         FROM {}",
        config.table
    );

    let rows: Vec<MovieRow> = sqlx::query_as(&sql).fetch_all(&mut conn).await?;
    conn.close().await?;

    let total = rows.len();
    let mut records = Vec::with_capacity(total);
    for (position, row) in rows.into_iter().enumerate() {
        match row.into_record() {
            Some(record) => records.push(record),
            None => warn!("Skipping row {} with a missing text column", position + 1),
        }
    }

    let skipped = total - records.len();
    if skipped > 0 {
        info!("Skipped {} malformed row(s)", skipped);
    }
    info!("Loaded {} movies", records.len());
    debug!("First movie: {:?}", records.first().map(|r| &r.title));

    Ok(Catalog::from_records(records))
}
