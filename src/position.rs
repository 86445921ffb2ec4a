//! 1-based line/column positions and ranges.
//!
//! The same types address both model space (the stored document) and view
//! space (the laid-out document). Which space a value lives in is carried by
//! the field that holds it, e.g. `position` vs `view_position`.

use std::fmt;

use crate::error::{Error, Result};

/// A 1-based (line, column) position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line_number: u32,
    pub column: u32,
}

impl Position {
    /// Create a new position.
    ///
    /// Both components are 1-based; use [`Position::try_new`] for input that
    /// has not been validated yet.
    #[must_use]
    pub fn new(line_number: u32, column: u32) -> Self {
        debug_assert!(
            line_number >= 1 && column >= 1,
            "positions are 1-based, got ({line_number}, {column})"
        );
        Self {
            line_number,
            column,
        }
    }

    /// Create a position, rejecting zero line numbers or columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if either component is zero.
    pub fn try_new(line_number: u32, column: u32) -> Result<Self> {
        if line_number == 0 || column == 0 {
            return Err(Error::InvalidPosition {
                line_number,
                column,
            });
        }
        Ok(Self {
            line_number,
            column,
        })
    }

    /// Position at the start of the document.
    #[must_use]
    pub fn start() -> Self {
        Self::new(1, 1)
    }

    /// Same line, different column.
    #[must_use]
    pub fn with_column(self, column: u32) -> Self {
        Self::new(self.line_number, column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line_number, self.column)
    }
}

/// A range between two positions, normalized so `start <= end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range from two positions in either order.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create a range from raw line/column components.
    #[must_use]
    pub fn from_coords(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// Zero-width range at a position.
    #[must_use]
    pub fn collapsed(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a position lies within the range (end inclusive).
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position >= self.start && position <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}
