use crate::search::Field;

/// Widget that currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Mode,
    Actor,
    Director,
    Genre,
}

impl Pane {
    pub const ORDER: [Pane; 4] = [Pane::Mode, Pane::Actor, Pane::Director, Pane::Genre];

    pub fn field(self) -> Option<Field> {
        match self {
            Pane::Mode => None,
            Pane::Actor => Some(Field::Actor),
            Pane::Director => Some(Field::Director),
            Pane::Genre => Some(Field::Genre),
        }
    }

    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Actor => Pane::Actor,
            Field::Director => Pane::Director,
            Field::Genre => Pane::Genre,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub searches: usize,
    pub last_match_count: Option<usize>,
    pub last_query: Option<String>,
}
