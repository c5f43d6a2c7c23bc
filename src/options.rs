use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::Catalog;

/// Distinct values offered in the actor, director and genre lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSets {
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub genres: Vec<String>,
}

impl OptionSets {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut actors = BTreeSet::new();
        let mut directors = BTreeSet::new();
        let mut genres = BTreeSet::new();

        for record in catalog {
            actors.extend(record.actor_names());
            directors.insert(record.director.as_str());
            genres.extend(record.genre_names());
        }

        let options = Self {
            actors: actors.into_iter().map(str::to_string).collect(),
            directors: directors.into_iter().map(str::to_string).collect(),
            genres: genres.into_iter().map(str::to_string).collect(),
        };

        debug!(
            "Indexed {} actors, {} directors, {} genres",
            options.actors.len(),
            options.directors.len(),
            options.genres.len()
        );

        options
    }
}
