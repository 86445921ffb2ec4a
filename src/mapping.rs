//! Model to view coordinate conversion.
//!
//! The translator only talks to [`CoordinateConverter`]. Wrapping and
//! folding layouts live with the owner and implement the trait; the crate
//! ships [`IdentityConverter`] for views that do neither.
//!
//! # Example
//!
//! ```
//! use cursor_view::{CoordinateConverter, Position};
//!
//! /// Every model line is preceded by one banner line in the view.
//! struct Banner;
//!
//! impl CoordinateConverter for Banner {
//!     fn model_position_to_view_position(&self, position: Position) -> Position {
//!         Position::new(position.line_number * 2, position.column)
//!     }
//! }
//!
//! assert_eq!(
//!     Banner.model_position_to_view_position(Position::new(3, 7)),
//!     Position::new(6, 7)
//! );
//! ```

use crate::position::{Position, Range};
use crate::selection::Selection;

/// Maps model-space coordinates to view-space coordinates.
///
/// Implementations answer from their current line-mapping state and must not
/// have side effects.
pub trait CoordinateConverter {
    fn model_position_to_view_position(&self, position: Position) -> Position;

    /// Map both ends of a selection, keeping anchor and active apart.
    fn model_selection_to_view_selection(&self, selection: &Selection) -> Selection {
        selection.map(|p| self.model_position_to_view_position(p))
    }

    fn model_range_to_view_range(&self, range: &Range) -> Range {
        Range::new(
            self.model_position_to_view_position(range.start),
            self.model_position_to_view_position(range.end),
        )
    }
}

impl<C: CoordinateConverter + ?Sized> CoordinateConverter for &C {
    fn model_position_to_view_position(&self, position: Position) -> Position {
        (**self).model_position_to_view_position(position)
    }

    fn model_selection_to_view_selection(&self, selection: &Selection) -> Selection {
        (**self).model_selection_to_view_selection(selection)
    }

    fn model_range_to_view_range(&self, range: &Range) -> Range {
        (**self).model_range_to_view_range(range)
    }
}

/// Converter for views that neither wrap nor fold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityConverter;

impl CoordinateConverter for IdentityConverter {
    fn model_position_to_view_position(&self, position: Position) -> Position {
        position
    }

    fn model_selection_to_view_selection(&self, selection: &Selection) -> Selection {
        *selection
    }
}
