use std::fmt;

use serde::{Deserialize, Serialize};

/// A caret location inside a document identified by an opaque locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub locator: String,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(locator: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            locator: locator.into(),
            line,
            column,
        }
    }

    pub fn same_locator(&self, other: &Position) -> bool {
        self.locator == other.locator
    }

    pub fn line_distance(&self, other: &Position) -> u32 {
        self.line.abs_diff(other.line)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.locator, self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Collapsed caret.
    Caret,
    /// Non-empty text selection.
    Range,
}

/// One settled caret notification from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretEvent {
    pub position: Position,
    pub selection: SelectionKind,
}

impl CaretEvent {
    pub fn caret(position: Position) -> Self {
        Self {
            position,
            selection: SelectionKind::Caret,
        }
    }

    pub fn range(position: Position) -> Self {
        Self {
            position,
            selection: SelectionKind::Range,
        }
    }

    pub fn is_selection(&self) -> bool {
        self.selection == SelectionKind::Range
    }
}
