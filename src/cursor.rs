//! Cursor and selection notifications produced by the cursor engine.
//!
//! Every state value carries model-space and view-space coordinates side by
//! side. The view-space half is whatever the cursor engine computed at the
//! time; the translator recomputes it from the model-space half when the
//! line mapping changes.

use crate::error::{Error, Result};
use crate::position::{Position, Range};
use crate::selection::Selection;

/// Cursor positions in both coordinate spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorPositionState {
    position: Position,
    view_position: Position,
    secondary_positions: Vec<Position>,
    secondary_view_positions: Vec<Position>,
    is_in_editable_range: bool,
}

impl CursorPositionState {
    /// Create a state with a single (primary) cursor.
    #[must_use]
    pub fn new(position: Position, view_position: Position, is_in_editable_range: bool) -> Self {
        Self {
            position,
            view_position,
            secondary_positions: Vec::new(),
            secondary_view_positions: Vec::new(),
            is_in_editable_range,
        }
    }

    /// Attach secondary cursors.
    ///
    /// `positions[i]` and `view_positions[i]` describe the same cursor, so
    /// both sequences must have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSecondaries`] when the lengths differ.
    pub fn with_secondaries(
        mut self,
        positions: Vec<Position>,
        view_positions: Vec<Position>,
    ) -> Result<Self> {
        if positions.len() != view_positions.len() {
            return Err(Error::MismatchedSecondaries {
                kind: "positions",
                model: positions.len(),
                view: view_positions.len(),
            });
        }
        self.secondary_positions = positions;
        self.secondary_view_positions = view_positions;
        Ok(self)
    }

    /// Primary cursor in model space.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Primary cursor in view space.
    #[must_use]
    pub fn view_position(&self) -> Position {
        self.view_position
    }

    #[must_use]
    pub fn secondary_positions(&self) -> &[Position] {
        &self.secondary_positions
    }

    #[must_use]
    pub fn secondary_view_positions(&self) -> &[Position] {
        &self.secondary_view_positions
    }

    #[must_use]
    pub fn is_in_editable_range(&self) -> bool {
        self.is_in_editable_range
    }

    /// Total number of cursors, primary included.
    #[must_use]
    pub fn cursor_count(&self) -> usize {
        1 + self.secondary_positions.len()
    }

    /// Same model positions with a new view half, computed per cursor by `f`.
    pub(crate) fn remap(&self, mut f: impl FnMut(Position) -> Position) -> Self {
        Self {
            position: self.position,
            view_position: f(self.position),
            secondary_positions: self.secondary_positions.clone(),
            secondary_view_positions: self.secondary_positions.iter().map(|&p| f(p)).collect(),
            is_in_editable_range: self.is_in_editable_range,
        }
    }
}

/// Selections in both coordinate spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorSelectionState {
    selection: Selection,
    view_selection: Selection,
    secondary_selections: Vec<Selection>,
    secondary_view_selections: Vec<Selection>,
}

impl CursorSelectionState {
    /// Create a state with only the primary selection.
    #[must_use]
    pub fn new(selection: Selection, view_selection: Selection) -> Self {
        Self {
            selection,
            view_selection,
            secondary_selections: Vec::new(),
            secondary_view_selections: Vec::new(),
        }
    }

    /// Attach secondary selections; both sequences must have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedSecondaries`] when the lengths differ.
    pub fn with_secondaries(
        mut self,
        selections: Vec<Selection>,
        view_selections: Vec<Selection>,
    ) -> Result<Self> {
        if selections.len() != view_selections.len() {
            return Err(Error::MismatchedSecondaries {
                kind: "selections",
                model: selections.len(),
                view: view_selections.len(),
            });
        }
        self.secondary_selections = selections;
        self.secondary_view_selections = view_selections;
        Ok(self)
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn view_selection(&self) -> Selection {
        self.view_selection
    }

    #[must_use]
    pub fn secondary_selections(&self) -> &[Selection] {
        &self.secondary_selections
    }

    #[must_use]
    pub fn secondary_view_selections(&self) -> &[Selection] {
        &self.secondary_view_selections
    }

    /// Same model selections with a new view half, computed per selection by `f`.
    pub(crate) fn remap(&self, mut f: impl FnMut(&Selection) -> Selection) -> Self {
        Self {
            selection: self.selection,
            view_selection: f(&self.selection),
            secondary_selections: self.secondary_selections.clone(),
            secondary_view_selections: self.secondary_selections.iter().map(&mut f).collect(),
        }
    }
}

/// How to place a revealed range vertically in the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalRevealType {
    /// Scroll the minimum amount needed.
    #[default]
    Simple,
    /// Center the range.
    Center,
    /// Center only when the range is currently off-screen.
    CenterIfOutsideViewport,
    /// Put the range at the top of the viewport.
    Top,
    /// Put the range at the bottom of the viewport.
    Bottom,
}

/// One-shot request to scroll a view-space range into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealRangeRequest {
    pub view_range: Range,
    pub vertical_type: VerticalRevealType,
    pub reveal_horizontal: bool,
    pub reveal_cursor: bool,
}

/// One-shot request to scroll by whole lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub delta_lines: i32,
    pub reveal_cursor: bool,
}
