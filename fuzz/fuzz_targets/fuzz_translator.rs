//! Fuzz target for cursor translation.
//!
//! Feeds arbitrary cursor states, render limits and line-mapping shifts
//! through the translator and checks that emitted cursors stay 1-based,
//! inside the render limit, and paired with their secondaries.

#![no_main]

use arbitrary::Arbitrary;
use cursor_view::{
    CoordinateConverter, CursorPositionState, CursorViewTranslator, Position, RenderLimit,
    ViewEvent,
};
use libfuzzer_sys::fuzz_target;
use std::cell::Cell;

#[derive(Arbitrary, Debug)]
struct Input {
    limit: Option<u16>,
    primary: (u16, u16),
    secondaries: Vec<(u16, u16)>,
    shifts: Vec<(u8, u8)>,
}

/// Pushes every position down and right by the current shift.
struct Shift(Cell<(u32, u32)>);

impl CoordinateConverter for Shift {
    fn model_position_to_view_position(&self, position: Position) -> Position {
        let (lines, columns) = self.0.get();
        Position::new(
            position.line_number.saturating_add(lines),
            position.column.saturating_add(columns),
        )
    }
}

fn position((line, column): (u16, u16)) -> Position {
    Position::new(u32::from(line) + 1, u32::from(column) + 1)
}

fn check(event: &ViewEvent, limit: RenderLimit, cursors: usize) {
    let ViewEvent::CursorPositionChanged(changed) = event else {
        panic!("expected a position event, got {event:?}");
    };
    assert_eq!(changed.secondary_positions.len() + 1, cursors);
    for p in std::iter::once(&changed.position).chain(&changed.secondary_positions) {
        assert!(p.line_number >= 1 && p.column >= 1);
        if let RenderLimit::Columns(max) = limit {
            assert!(p.column <= max.max(1));
        }
    }
}

fuzz_target!(|input: Input| {
    let limit = input
        .limit
        .map_or(RenderLimit::Unlimited, |max| RenderLimit::Columns(u32::from(max)));
    let secondaries: Vec<Position> = input
        .secondaries
        .iter()
        .take(64)
        .copied()
        .map(position)
        .collect();
    let primary = position(input.primary);
    let Ok(state) = CursorPositionState::new(primary, primary, true)
        .with_secondaries(secondaries.clone(), secondaries)
    else {
        return;
    };
    let cursors = state.cursor_count();

    let mut translator = CursorViewTranslator::new(limit, Shift(Cell::new((0, 0))));
    let mut events = Vec::new();
    translator.handle_position_changed(state, &mut |e: ViewEvent| events.push(e));

    for (lines, columns) in input.shifts.iter().take(16) {
        translator
            .converter()
            .0
            .set((u32::from(*lines), u32::from(*columns)));
        translator.handle_line_mapping_changed(&mut |e: ViewEvent| events.push(e));
    }

    assert_eq!(events.len(), 1 + input.shifts.len().min(16));
    for event in &events {
        check(event, limit, cursors);
    }
});
