//! Anchor/active selections.

use std::fmt;

use crate::position::{Position, Range};

/// Which way a selection was made.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Anchor at or before the active end.
    #[default]
    Forward,
    /// Active end before the anchor.
    Backward,
}

/// A selection from `anchor` (where it started) to `active` (where the
/// cursor is). An empty selection is a bare cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Create an empty selection at a cursor position.
    #[must_use]
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Create a selection from raw line/column components.
    #[must_use]
    pub fn from_coords(
        anchor_line: u32,
        anchor_column: u32,
        active_line: u32,
        active_column: u32,
    ) -> Self {
        Self::new(
            Position::new(anchor_line, anchor_column),
            Position::new(active_line, active_column),
        )
    }

    /// Earlier of the two ends.
    #[must_use]
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// Later of the two ends.
    #[must_use]
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    #[must_use]
    pub fn direction(&self) -> SelectionDirection {
        if self.active < self.anchor {
            SelectionDirection::Backward
        } else {
            SelectionDirection::Forward
        }
    }

    /// Normalized range covered by the selection.
    #[must_use]
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    /// Apply a position mapping to both ends, keeping the direction.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Position) -> Position,
    {
        Self::new(f(self.anchor), f(self.active))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.anchor, self.active)
    }
}
