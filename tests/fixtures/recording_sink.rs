//! Event sink that records everything it receives.

#![allow(dead_code)] // Shared test helpers; not every integration test uses every helper

use cursor_view::{
    EventSink, ViewCursorPositionChanged, ViewCursorSelectionChanged, ViewEvent, ViewEventKind,
};

/// Sink capturing view events in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<ViewEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take the recorded events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Tags of the recorded events, in order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.kind().as_str()).collect()
    }

    pub fn last_position(&self) -> Option<&ViewCursorPositionChanged> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::CursorPositionChanged(p) => Some(p),
            _ => None,
        })
    }

    pub fn last_selection(&self) -> Option<&ViewCursorSelectionChanged> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::CursorSelectionChanged(s) => Some(s),
            _ => None,
        })
    }

    pub fn count_of(&self, kind: ViewEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: ViewEvent) {
        self.events.push(event);
    }
}
