//! Cursor state translation from model space into view events.
//!
//! [`CursorViewTranslator`] sits between the cursor engine and the rendering
//! layer. The cursor engine reports every cursor and selection change with
//! both model and view coordinates; the translator clamps cursor positions to
//! the renderable part of their line and forwards them as [`ViewEvent`]s.
//!
//! The last position and selection states are retained. When the line
//! mapping changes (re-wrap, fold, resize) the owner calls
//! [`CursorViewTranslator::handle_line_mapping_changed`] and the retained
//! model coordinates are pushed through the converter again, so the cursor
//! engine never has to resend anything.
//!
//! # Example
//!
//! ```
//! use cursor_view::{
//!     CursorPositionState, CursorViewTranslator, IdentityConverter, Position, RenderLimit,
//!     ViewEvent,
//! };
//!
//! let mut translator = CursorViewTranslator::new(RenderLimit::Columns(120), IdentityConverter);
//! let mut events = Vec::new();
//! let state = CursorPositionState::new(Position::new(5, 200), Position::new(5, 200), true);
//! translator.handle_position_changed(state, &mut |e: ViewEvent| events.push(e));
//!
//! let ViewEvent::CursorPositionChanged(changed) = &events[0] else {
//!     panic!("expected a position event");
//! };
//! assert_eq!(changed.position, Position::new(5, 120));
//! ```

use crate::cursor::{CursorPositionState, CursorSelectionState, RevealRangeRequest, ScrollRequest};
use crate::event::{
    EventSink, LogLevel, ViewCursorPositionChanged, ViewCursorSelectionChanged, ViewEvent,
    ViewRevealRangeRequest, ViewScrollRequest, log_event,
};
use crate::mapping::CoordinateConverter;
use crate::render_limit::{RenderLimitPolicy, to_renderable_position};

/// Translates cursor notifications into clamped view events.
#[derive(Debug)]
pub struct CursorViewTranslator<P, C> {
    policy: P,
    converter: C,
    position_state: Option<CursorPositionState>,
    selection_state: Option<CursorSelectionState>,
}

impl<P, C> CursorViewTranslator<P, C>
where
    P: RenderLimitPolicy,
    C: CoordinateConverter,
{
    /// Create a translator with nothing retained yet.
    #[must_use]
    pub fn new(policy: P, converter: C) -> Self {
        Self {
            policy,
            converter,
            position_state: None,
            selection_state: None,
        }
    }

    /// Retain `state` and emit its view positions, clamped to the current
    /// render limit.
    pub fn handle_position_changed<S>(&mut self, state: CursorPositionState, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        debug_assert_eq!(
            state.secondary_positions().len(),
            state.secondary_view_positions().len(),
            "secondary model and view positions must pair up"
        );

        let limit = self.policy.render_limit();
        let position = to_renderable_position(state.view_position(), limit);
        if position != state.view_position() {
            log_event!(
                LogLevel::Debug,
                "cursor {} clamped to {} by {:?}",
                state.view_position(),
                position,
                limit
            );
        }
        let secondary_positions = state
            .secondary_view_positions()
            .iter()
            .map(|&p| to_renderable_position(p, limit))
            .collect();
        let is_in_editable_range = state.is_in_editable_range();

        self.position_state = Some(state);

        sink.emit(ViewEvent::CursorPositionChanged(ViewCursorPositionChanged {
            position,
            secondary_positions,
            is_in_editable_range,
        }));
    }

    /// Retain `state` and emit its view selections unchanged.
    ///
    /// Selections are not clamped; truncated lines draw their own overflow.
    pub fn handle_selection_changed<S>(&mut self, state: CursorSelectionState, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        debug_assert_eq!(
            state.secondary_selections().len(),
            state.secondary_view_selections().len(),
            "secondary model and view selections must pair up"
        );

        let event = ViewCursorSelectionChanged {
            selection: state.view_selection(),
            secondary_selections: state.secondary_view_selections().to_vec(),
        };
        self.selection_state = Some(state);
        sink.emit(ViewEvent::CursorSelectionChanged(event));
    }

    pub fn handle_reveal_range_requested<S>(&mut self, request: RevealRangeRequest, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        sink.emit(ViewEvent::RevealRangeRequest(ViewRevealRangeRequest {
            range: request.view_range,
            vertical_type: request.vertical_type,
            reveal_horizontal: request.reveal_horizontal,
            reveal_cursor: request.reveal_cursor,
        }));
    }

    pub fn handle_scroll_requested<S>(&mut self, request: ScrollRequest, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        sink.emit(ViewEvent::ScrollRequest(ViewScrollRequest {
            delta_lines: request.delta_lines,
            reveal_cursor: request.reveal_cursor,
        }));
    }

    /// Recompute view coordinates of the retained states and re-emit them.
    ///
    /// Emits a position event, then a selection event, for whichever states
    /// are retained. Emits nothing before the first notification.
    pub fn handle_line_mapping_changed<S>(&mut self, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if let Some(state) = self.replay_position_state() {
            log_event!(
                LogLevel::Debug,
                "line mapping changed: replaying {} cursor(s)",
                state.cursor_count()
            );
            self.handle_position_changed(state, &mut *sink);
        }

        if let Some(state) = self.replay_selection_state() {
            log_event!(
                LogLevel::Debug,
                "line mapping changed: replaying {} selection(s)",
                1 + state.secondary_selections().len()
            );
            self.handle_selection_changed(state, sink);
        }
    }

    fn replay_position_state(&self) -> Option<CursorPositionState> {
        let converter = &self.converter;
        self.position_state
            .as_ref()
            .map(|retained| retained.remap(|p| converter.model_position_to_view_position(p)))
    }

    fn replay_selection_state(&self) -> Option<CursorSelectionState> {
        let converter = &self.converter;
        self.selection_state
            .as_ref()
            .map(|retained| retained.remap(|s| converter.model_selection_to_view_selection(s)))
    }
}

impl<P, C> CursorViewTranslator<P, C> {
    /// Last position state received, if any.
    #[must_use]
    pub fn position_state(&self) -> Option<&CursorPositionState> {
        self.position_state.as_ref()
    }

    /// Last selection state received, if any.
    #[must_use]
    pub fn selection_state(&self) -> Option<&CursorSelectionState> {
        self.selection_state.as_ref()
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    #[must_use]
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Mutable access to the converter, e.g. to re-wrap.
    ///
    /// Follow any change with [`Self::handle_line_mapping_changed`].
    pub fn converter_mut(&mut self) -> &mut C {
        &mut self.converter
    }

    /// Take the collaborators back, dropping retained state.
    pub fn into_parts(self) -> (P, C) {
        (self.policy, self.converter)
    }
}
