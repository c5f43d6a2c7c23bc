// Integration tests for loading the catalog from SQLite

use std::path::Path;

use movie_finder::catalog::load_catalog;
use movie_finder::config::ConfigBuilder;
use movie_finder::error::CatalogError;
use movie_finder::options::OptionSets;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

async fn create_movies_db(path: &Path, rows: &[(&str, Option<&str>, &str, &str, Option<f64>, Option<i64>)]) {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create test database");

    sqlx::query(
        r#"
        CREATE TABLE movies (
            Series_Title TEXT,
            Genre TEXT,
            Director TEXT,
            Actors TEXT,
            IMDB_Rating REAL,
            Meta_score INTEGER
        )
        "#,
    )
    .execute(&mut conn)
    .await
    .expect("Failed to create movies table");

    for (title, director, actors, genre, rating, score) in rows {
        sqlx::query(
            "INSERT INTO movies (Series_Title, Genre, Director, Actors, IMDB_Rating, Meta_score) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(*title)
        .bind(*genre)
        .bind(*director)
        .bind(*actors)
        .bind(*rating)
        .bind(*score)
        .execute(&mut conn)
        .await
        .expect("Failed to insert movie");
    }

    conn.close().await.expect("Failed to close test database");
}

#[tokio::test]
async fn test_load_keeps_table_order_and_values() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("moviesDB.db");
    create_movies_db(
        &db_path,
        &[
            ("A", Some("X"), "P,Q", "Drama", Some(8.0), Some(70)),
            ("B", Some("Y"), "Q,R", "Comedy", Some(7.5), Some(90)),
            ("C", Some("X"), "S", "Drama,Crime", Some(9.1), None),
        ],
    )
    .await;

    let config = ConfigBuilder::new().database(&db_path).build().unwrap();
    let catalog = load_catalog(&config).await.unwrap();

    let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);

    let first = &catalog.records()[0];
    assert_eq!(first.director, "X");
    assert_eq!(first.actors, "P,Q");
    assert_eq!(first.genres, "Drama");
    assert_eq!(first.imdb_rating, Some(8.0));
    assert_eq!(first.meta_score, Some(70.0));

    assert_eq!(catalog.records()[2].meta_score, None);
}

#[tokio::test]
async fn test_rows_missing_text_columns_are_skipped() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("moviesDB.db");
    create_movies_db(
        &db_path,
        &[
            ("A", Some("X"), "P,Q", "Drama", Some(8.0), Some(70)),
            ("Nameless", None, "Q", "Drama", Some(6.0), Some(50)),
        ],
    )
    .await;

    let config = ConfigBuilder::new().database(&db_path).build().unwrap();
    let catalog = load_catalog(&config).await.unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].title, "A");
}

#[tokio::test]
async fn test_missing_database_is_fatal() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("absent.db");

    let config = ConfigBuilder::new().database(&db_path).build().unwrap();
    let result = load_catalog(&config).await;

    assert!(matches!(result, Err(CatalogError::Missing(_))));
    assert!(!db_path.exists(), "loading must never create the database");
}

#[tokio::test]
async fn test_wrong_table_is_a_database_error() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("moviesDB.db");
    create_movies_db(&db_path, &[]).await;

    let config = ConfigBuilder::new()
        .database(&db_path)
        .table("films")
        .build()
        .unwrap();
    let result = load_catalog(&config).await;

    assert!(matches!(result, Err(CatalogError::Database(_))));
}

#[tokio::test]
async fn test_option_sets_from_loaded_catalog() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("moviesDB.db");
    create_movies_db(
        &db_path,
        &[
            ("A", Some("X"), "P,Q", "Drama", Some(8.0), Some(70)),
            ("B", Some("Y"), "Q,R", "Comedy", Some(7.5), Some(90)),
            ("C", Some("X"), "R", "Drama,Crime", Some(9.1), Some(88)),
        ],
    )
    .await;

    let config = ConfigBuilder::new().database(&db_path).build().unwrap();
    let catalog = load_catalog(&config).await.unwrap();
    let options = OptionSets::from_catalog(&catalog);

    assert_eq!(options.actors, vec!["P", "Q", "R"]);
    assert_eq!(options.directors, vec!["X", "Y"]);
    assert_eq!(options.genres, vec!["Comedy", "Crime", "Drama"]);
}
