//! Search modes and the substring filter behind them.
//!
//! Matching is plain `str::contains` on the raw column text, so a selection
//! of "Anne" also hits "Anne Hathaway" or any co-star whose name contains it,
//! and an empty selection matches every movie.

use std::fmt;

use crate::catalog::{Catalog, MovieRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Actor,
    Director,
    Genre,
    All,
}

/// Which selection list a mode reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Actor,
    Director,
    Genre,
}

impl SearchMode {
    pub const ALL_MODES: [SearchMode; 4] = [
        SearchMode::Actor,
        SearchMode::Director,
        SearchMode::Genre,
        SearchMode::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Actor => "Actor",
            SearchMode::Director => "Director",
            SearchMode::Genre => "Genre",
            SearchMode::All => "All",
        }
    }

    pub fn enables(self, field: Field) -> bool {
        match self {
            SearchMode::Actor => field == Field::Actor,
            SearchMode::Director => field == Field::Director,
            SearchMode::Genre => field == Field::Genre,
            SearchMode::All => true,
        }
    }

    /// Binds the current selections to this mode's predicate.
    pub fn query<'s>(self, selections: &Selections<'s>) -> SearchQuery<'s> {
        match self {
            SearchMode::Actor => SearchQuery::Actor(selections.actor),
            SearchMode::Director => SearchQuery::Director(selections.director),
            SearchMode::Genre => SearchQuery::Genre(selections.genre),
            SearchMode::All => SearchQuery::All {
                actor: selections.actor,
                director: selections.director,
                genre: selections.genre,
            },
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Currently highlighted value of each selection list ("" when nothing is selected).
#[derive(Debug, Clone, Copy, Default)]
pub struct Selections<'s> {
    pub actor: &'s str,
    pub director: &'s str,
    pub genre: &'s str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchQuery<'s> {
    Actor(&'s str),
    Director(&'s str),
    Genre(&'s str),
    All {
        actor: &'s str,
        director: &'s str,
        genre: &'s str,
    },
}

impl SearchQuery<'_> {
    pub fn matches(&self, record: &MovieRecord) -> bool {
        match *self {
            SearchQuery::Actor(actor) => record.actors.contains(actor),
            SearchQuery::Director(director) => record.director.contains(director),
            SearchQuery::Genre(genre) => record.genres.contains(genre),
            SearchQuery::All {
                actor,
                director,
                genre,
            } => {
                record.genres.contains(genre)
                    && record.director.contains(director)
                    && record.actors.contains(actor)
            }
        }
    }
}

impl fmt::Display for SearchQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchQuery::Actor(actor) => write!(f, "actor '{}'", actor),
            SearchQuery::Director(director) => write!(f, "director '{}'", director),
            SearchQuery::Genre(genre) => write!(f, "genre '{}'", genre),
            SearchQuery::All {
                actor,
                director,
                genre,
            } => write!(
                f,
                "actor '{}', director '{}', genre '{}'",
                actor, director, genre
            ),
        }
    }
}

/// Movies matching one search, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet<'c> {
    rows: Vec<&'c MovieRecord>,
}

impl<'c> ResultSet<'c> {
    pub fn rows(&self) -> &[&'c MovieRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn titles(&self) -> Vec<&'c str> {
        self.rows.iter().map(|r| r.title.as_str()).collect()
    }
}

pub fn filter<'c>(catalog: &'c Catalog, query: &SearchQuery<'_>) -> ResultSet<'c> {
    ResultSet {
        rows: catalog.iter().filter(|record| query.matches(record)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_enables_expected_fields() {
        assert!(SearchMode::Actor.enables(Field::Actor));
        assert!(!SearchMode::Actor.enables(Field::Director));
        assert!(!SearchMode::Director.enables(Field::Genre));
        assert!(SearchMode::Genre.enables(Field::Genre));

        for field in [Field::Actor, Field::Director, Field::Genre] {
            assert!(SearchMode::All.enables(field));
        }
    }

    #[test]
    fn test_query_binds_only_the_mode_selection() {
        let selections = Selections {
            actor: "Q",
            director: "X",
            genre: "Drama",
        };

        assert_eq!(SearchMode::Director.query(&selections), SearchQuery::Director("X"));
        assert_eq!(
            SearchMode::All.query(&selections),
            SearchQuery::All {
                actor: "Q",
                director: "X",
                genre: "Drama"
            }
        );
    }

    #[test]
    fn test_substring_looseness_is_kept() {
        let record = MovieRecord::new("T", "D", "Anne Hathaway,Joanne Smith", "Drama", None, None);

        assert!(SearchQuery::Actor("Anne").matches(&record));
        assert!(SearchQuery::Actor("anne").matches(&record));
        assert!(SearchQuery::Actor("").matches(&record));
        assert!(!SearchQuery::Actor("ANNE").matches(&record));
    }
}
