//! View events, event sinks and the log callback system.

use std::fmt;
use std::sync::{Mutex, OnceLock};

use crate::cursor::VerticalRevealType;
use crate::position::{Position, Range};
use crate::selection::Selection;

/// Cursor positions as the view should draw them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewCursorPositionChanged {
    pub position: Position,
    pub secondary_positions: Vec<Position>,
    pub is_in_editable_range: bool,
}

/// Selections as the view should draw them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewCursorSelectionChanged {
    pub selection: Selection,
    pub secondary_selections: Vec<Selection>,
}

/// Request to bring a view-space range on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewRevealRangeRequest {
    pub range: Range,
    pub vertical_type: VerticalRevealType,
    pub reveal_horizontal: bool,
    pub reveal_cursor: bool,
}

/// Request to scroll the view by whole lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewScrollRequest {
    pub delta_lines: i32,
    pub reveal_cursor: bool,
}

/// Events emitted towards the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    CursorPositionChanged(ViewCursorPositionChanged),
    CursorSelectionChanged(ViewCursorSelectionChanged),
    RevealRangeRequest(ViewRevealRangeRequest),
    ScrollRequest(ViewScrollRequest),
}

impl ViewEvent {
    /// Discriminant of this event.
    #[must_use]
    pub fn kind(&self) -> ViewEventKind {
        match self {
            Self::CursorPositionChanged(_) => ViewEventKind::CursorPositionChanged,
            Self::CursorSelectionChanged(_) => ViewEventKind::CursorSelectionChanged,
            Self::RevealRangeRequest(_) => ViewEventKind::RevealRangeRequest,
            Self::ScrollRequest(_) => ViewEventKind::ScrollRequest,
        }
    }
}

/// Tag identifying a [`ViewEvent`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewEventKind {
    CursorPositionChanged,
    CursorSelectionChanged,
    RevealRangeRequest,
    ScrollRequest,
}

impl ViewEventKind {
    /// Stable name, usable as a key on string-based event buses.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CursorPositionChanged => "cursor-position-changed",
            Self::CursorSelectionChanged => "cursor-selection-changed",
            Self::RevealRangeRequest => "reveal-range",
            Self::ScrollRequest => "scroll-request",
        }
    }
}

impl fmt::Display for ViewEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for translated view events.
///
/// Events are delivered synchronously, one call per event, and never
/// buffered by the sender.
pub trait EventSink {
    fn emit(&mut self, event: ViewEvent);
}

impl<F> EventSink for F
where
    F: FnMut(ViewEvent) + ?Sized,
{
    fn emit(&mut self, event: ViewEvent) {
        (*self)(event);
    }
}

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Check whether a log callback is installed.
///
/// Lets callers skip formatting messages nobody will read.
#[must_use]
pub fn log_enabled() -> bool {
    log_callback().lock().is_ok_and(|guard| guard.is_some())
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    let Ok(guard) = log_callback().lock() else {
        return;
    };
    if let Some(callback) = guard.as_ref() {
        callback(level, message);
    }
}

/// Format and emit a log event only when a callback is installed.
macro_rules! log_event {
    ($level:expr, $($arg:tt)+) => {
        if $crate::event::log_enabled() {
            $crate::event::emit_log($level, &format!($($arg)+));
        }
    };
}

pub(crate) use log_event;
