use std::cmp::Ordering;

use crate::catalog::MovieRecord;
use crate::search::ResultSet;

/// Rows charted per search.
pub const CHART_ROWS: usize = 5;

pub const NO_RESULTS_MESSAGE: &str = "No results found for your search !";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub title: String,
    pub value: Option<f64>,
}

/// The two chart panels for one search: rating bars and score stems.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingCharts {
    pub by_rating: Vec<ChartPoint>,
    pub by_score: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    NoResults,
    Charts(RatingCharts),
}

/// Truncates to the first rows in catalog order, then orders that slice twice.
pub fn present(results: &ResultSet<'_>) -> Presentation {
    if results.is_empty() {
        return Presentation::NoResults;
    }

    let head: Vec<&MovieRecord> = results.rows().iter().take(CHART_ROWS).copied().collect();

    let by_rating = ordered_points(&head, |r| r.imdb_rating);
    let by_score = ordered_points(&head, |r| r.meta_score);

    Presentation::Charts(RatingCharts {
        by_rating,
        by_score,
    })
}

fn ordered_points(rows: &[&MovieRecord], key: impl Fn(&MovieRecord) -> Option<f64>) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = rows
        .iter()
        .map(|&r| ChartPoint {
            title: r.title.clone(),
            value: key(r),
        })
        .collect();
    points.sort_by(|a, b| descending_missing_last(a.value, b.value));
    points
}

fn descending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
