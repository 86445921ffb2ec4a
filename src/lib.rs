//! `cursor_view` - cursor state translation between model and view space
//!
//! An editor keeps cursors in model coordinates (lines and columns of the
//! stored text) but draws them in view coordinates (lines and columns after
//! wrapping, folding and truncation). This crate provides the piece in
//! between: [`CursorViewTranslator`] turns cursor notifications into clamped
//! [`ViewEvent`]s and replays the last known cursor state whenever the line
//! mapping changes.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // ViewEvent/ViewEventKind live in `event`
#![allow(clippy::missing_const_for_fn)] // Accessors are deliberately not const

pub mod cursor;
pub mod error;
pub mod event;
pub mod mapping;
pub mod options;
pub mod position;
pub mod render_limit;
pub mod selection;
pub mod translator;

// Re-export core types at crate root
pub use cursor::{
    CursorPositionState, CursorSelectionState, RevealRangeRequest, ScrollRequest,
    VerticalRevealType,
};
pub use error::{Error, Result};
pub use event::{
    EventSink, LogLevel, ViewCursorPositionChanged, ViewCursorSelectionChanged, ViewEvent,
    ViewEventKind, ViewRevealRangeRequest, ViewScrollRequest, clear_log_callback, emit_log,
    log_enabled, set_log_callback,
};
pub use mapping::{CoordinateConverter, IdentityConverter};
pub use options::TranslatorOptions;
pub use position::{Position, Range};
pub use render_limit::{RenderLimit, RenderLimitPolicy, to_renderable_position};
pub use selection::{Selection, SelectionDirection};
pub use translator::CursorViewTranslator;
