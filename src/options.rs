//! Translator configuration.

use crate::render_limit::{RenderLimit, RenderLimitPolicy};

/// Default column after which line rendering stops.
pub const DEFAULT_STOP_RENDERING_LINE_AFTER: u32 = 10_000;

/// Translator configuration options.
///
/// The options double as a [`RenderLimitPolicy`], so an owner that keeps its
/// configuration in one place can hand it to the translator directly and
/// update it through [`crate::CursorViewTranslator::policy_mut`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslatorOptions {
    /// Stop rendering a line after this many columns. `None` renders lines
    /// in full.
    pub stop_rendering_line_after: Option<u32>,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            stop_rendering_line_after: Some(DEFAULT_STOP_RENDERING_LINE_AFTER),
        }
    }
}

impl TranslatorOptions {
    /// Options that never truncate lines.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            stop_rendering_line_after: None,
        }
    }

    /// Set the render cutoff column.
    #[must_use]
    pub fn stop_rendering_line_after(mut self, columns: Option<u32>) -> Self {
        self.stop_rendering_line_after = columns;
        self
    }

    /// Render limit described by these options.
    #[must_use]
    pub fn render_limit(&self) -> RenderLimit {
        self.stop_rendering_line_after
            .map_or(RenderLimit::Unlimited, RenderLimit::Columns)
    }
}

impl RenderLimitPolicy for TranslatorOptions {
    fn render_limit(&self) -> RenderLimit {
        Self::render_limit(self)
    }
}
