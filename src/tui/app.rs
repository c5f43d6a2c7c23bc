use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::catalog::Catalog;
use crate::options::OptionSets;
use crate::presenter::RatingCharts;
use crate::search::{Field, SearchMode, Selections};
use super::models::{Pane, SearchStats};

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug)]
pub struct App {
    pub catalog: Catalog,
    pub options: OptionSets,
    /// `None` until the user picks a mode; every selection list is disabled meanwhile
    pub mode: Option<SearchMode>,
    pub focus: Pane,
    pub mode_state: ListState,
    pub actor_state: ListState,
    pub director_state: ListState,
    pub genre_state: ListState,
    pub charts: Option<RatingCharts>,
    pub notice: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
    pub stats: SearchStats,
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

fn first_selected(len: usize) -> ListState {
    let mut state = ListState::default();
    state.select(if len == 0 { None } else { Some(0) });
    state
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let options = OptionSets::from_catalog(&catalog);

        let mut mode_state = ListState::default();
        mode_state.select(Some(0));

        let actor_state = first_selected(options.actors.len());
        let director_state = first_selected(options.directors.len());
        let genre_state = first_selected(options.genres.len());

        Self {
            catalog,
            options,
            mode: None,
            focus: Pane::Mode,
            mode_state,
            actor_state,
            director_state,
            genre_state,
            charts: None,
            notice: None,
            show_help: false,
            should_quit: false,
            stats: SearchStats::default(),
            status_message: None,
            status_message_time: None,
        }
    }

    pub fn is_enabled(&self, field: Field) -> bool {
        self.mode.is_some_and(|mode| mode.enables(field))
    }

    pub fn values(&self, field: Field) -> &[String] {
        match field {
            Field::Actor => &self.options.actors,
            Field::Director => &self.options.directors,
            Field::Genre => &self.options.genres,
        }
    }

    pub fn list_state(&self, field: Field) -> &ListState {
        match field {
            Field::Actor => &self.actor_state,
            Field::Director => &self.director_state,
            Field::Genre => &self.genre_state,
        }
    }

    fn list_state_mut(&mut self, field: Field) -> &mut ListState {
        match field {
            Field::Actor => &mut self.actor_state,
            Field::Director => &mut self.director_state,
            Field::Genre => &mut self.genre_state,
        }
    }

    /// Highlighted value of a selection list, or "" if the list is empty.
    pub fn selected_value(&self, field: Field) -> &str {
        self.list_state(field)
            .selected()
            .and_then(|i| self.values(field).get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn selections(&self) -> Selections<'_> {
        Selections {
            actor: self.selected_value(Field::Actor),
            director: self.selected_value(Field::Director),
            genre: self.selected_value(Field::Genre),
        }
    }

    pub fn highlighted_mode(&self) -> SearchMode {
        let index = self.mode_state.selected().unwrap_or(0);
        SearchMode::ALL_MODES[index.min(SearchMode::ALL_MODES.len() - 1)]
    }

    fn focusable(&self) -> Vec<Pane> {
        Pane::ORDER
            .into_iter()
            .filter(|pane| pane.field().is_none_or(|field| self.is_enabled(field)))
            .collect()
    }

    pub fn focus_next(&mut self) {
        let panes = self.focusable();
        let current = panes.iter().position(|p| *p == self.focus).unwrap_or(0);
        self.focus = panes[(current + 1) % panes.len()];
    }

    pub fn focus_previous(&mut self) {
        let panes = self.focusable();
        let current = panes.iter().position(|p| *p == self.focus).unwrap_or(0);
        self.focus = panes[(current + panes.len() - 1) % panes.len()];
    }

    pub fn next(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let state = self.focused_state_mut();
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let state = self.focused_state_mut();
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    fn focused_len(&self) -> usize {
        match self.focus.field() {
            Some(field) => self.values(field).len(),
            None => SearchMode::ALL_MODES.len(),
        }
    }

    fn focused_state_mut(&mut self) -> &mut ListState {
        match self.focus.field() {
            Some(field) => self.list_state_mut(field),
            None => &mut self.mode_state,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Closes the topmost popup or chart view. Returns false if nothing was open.
    pub fn dismiss_overlay(&mut self) -> bool {
        if self.show_help {
            self.show_help = false;
        } else if self.notice.is_some() {
            self.notice = None;
        } else if self.charts.is_some() {
            self.charts = None;
        } else {
            return false;
        }
        true
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    pub fn clear_status_message_if_expired(&mut self) {
        if let (Some(_), Some(time)) = (&self.status_message, self.status_message_time) {
            if time.elapsed() > STATUS_MESSAGE_TTL {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}
