//! Render limits: how many columns of a line the renderer will lay out.

use std::cell::Cell;

use crate::position::Position;

/// Column threshold past which a line is not rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderLimit {
    /// Lines are rendered in full.
    #[default]
    Unlimited,
    /// Only the first `n` columns are rendered.
    Columns(u32),
}

impl RenderLimit {
    /// Clamp a view position into the renderable prefix of its line.
    #[must_use]
    pub fn clamp(self, position: Position) -> Position {
        to_renderable_position(position, self)
    }

    #[must_use]
    pub fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

/// Clamp `position` so its column does not exceed `limit`.
///
/// The line number is never touched. A limit of zero columns still leaves
/// the cursor on column 1.
#[must_use]
pub fn to_renderable_position(position: Position, limit: RenderLimit) -> Position {
    match limit {
        RenderLimit::Columns(max) if position.column > max => position.with_column(max.max(1)),
        _ => position,
    }
}

/// Source of the current render limit.
///
/// Queried on every translation; implementations may return a different
/// limit between calls.
pub trait RenderLimitPolicy {
    fn render_limit(&self) -> RenderLimit;
}

impl RenderLimitPolicy for RenderLimit {
    fn render_limit(&self) -> RenderLimit {
        *self
    }
}

impl RenderLimitPolicy for Cell<RenderLimit> {
    fn render_limit(&self) -> RenderLimit {
        self.get()
    }
}

impl<P: RenderLimitPolicy + ?Sized> RenderLimitPolicy for &P {
    fn render_limit(&self) -> RenderLimit {
        (**self).render_limit()
    }
}
