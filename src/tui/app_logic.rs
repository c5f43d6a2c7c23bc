use tracing::{debug, info};

use crate::presenter::{self, Presentation, NO_RESULTS_MESSAGE};
use crate::search::{self, Field, SearchMode};
use super::app::App;
use super::models::Pane;

impl App {
    /// Applies the mode highlighted in the mode list.
    pub fn activate_mode(&mut self) {
        let mode = self.highlighted_mode();
        self.select_mode(mode);
    }

    pub fn select_mode(&mut self, mode: SearchMode) {
        self.mode = Some(mode);
        if let Some(index) = SearchMode::ALL_MODES.iter().position(|m| *m == mode) {
            self.mode_state.select(Some(index));
        }

        // Land on the first list this mode searches by
        let first_enabled = [Field::Actor, Field::Director, Field::Genre]
            .into_iter()
            .find(|field| mode.enables(*field));
        if let Some(field) = first_enabled {
            self.focus = Pane::for_field(field);
        }

        info!("Search mode set to {}", mode);
        self.set_status_message(format!("Searching by {}", mode));
    }

    pub fn search(&mut self) {
        let Some(mode) = self.mode else {
            self.set_status_message("Pick a search mode first".to_string());
            return;
        };

        let (presentation, match_count, description) = {
            let selections = self.selections();
            let query = mode.query(&selections);
            let results = search::filter(&self.catalog, &query);
            debug!("Matched titles: {:?}", results.titles());
            (presenter::present(&results), results.len(), query.to_string())
        };

        info!("Search by {} matched {} movie(s)", description, match_count);

        self.stats.searches += 1;
        self.stats.last_match_count = Some(match_count);
        self.stats.last_query = Some(description);

        match presentation {
            Presentation::NoResults => {
                self.charts = None;
                self.notice = Some(NO_RESULTS_MESSAGE.to_string());
            }
            Presentation::Charts(charts) => {
                self.notice = None;
                self.charts = Some(charts);
            }
        }
    }
}
