//! Soft-wrapping converter over a rope-backed document.
//!
//! Gives the integration tests and benches a real layout to re-wrap, so
//! replays are checked against something other than a lookup table.

#![allow(dead_code)] // Shared test helpers; not every integration test uses every helper

use cursor_view::{CoordinateConverter, Position};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Text wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapMode {
    /// One view line per model line.
    #[default]
    None,
    /// Wrap at grapheme boundaries.
    Char,
    /// Wrap after whitespace; whitespace hangs at the end of a view line.
    Word,
}

/// One rendered line: the `char_start..char_end` slice of a model line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewLine {
    /// 0-based model line.
    pub model_line: usize,
    pub char_start: usize,
    pub char_end: usize,
    /// Display width in columns, tabs expanded.
    pub width: usize,
    pub is_wrap: bool,
}

impl ViewLine {
    pub fn len_chars(&self) -> usize {
        self.char_end - self.char_start
    }
}

#[derive(Clone, Copy, Debug)]
struct Grapheme {
    char_start: usize,
    char_len: usize,
    width: usize,
    is_tab: bool,
    is_whitespace: bool,
}

/// Model to view mapping for a soft-wrapped document.
///
/// Layout is recomputed eagerly on every change. Model positions outside
/// the document clamp to it.
#[derive(Clone, Debug)]
pub struct WrappedLineMapping {
    rope: Rope,
    mode: WrapMode,
    width: u32,
    tab_width: usize,
    view_lines: Vec<ViewLine>,
    /// Index of the first view line of each model line.
    first_view_line: Vec<usize>,
}

impl WrappedLineMapping {
    pub fn new(text: &str, mode: WrapMode, width: u32) -> Self {
        assert!(width > 0, "wrap width must be at least one column");
        let mut mapping = Self {
            rope: Rope::from_str(text),
            mode,
            width,
            tab_width: 4,
            view_lines: Vec::new(),
            first_view_line: Vec::new(),
        };
        mapping.relayout();
        mapping
    }

    pub fn with_tab_width(mut self, tab_width: u8) -> Self {
        assert!(tab_width > 0, "tab width must be at least one column");
        self.tab_width = usize::from(tab_width);
        self.relayout();
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.relayout();
    }

    pub fn set_wrap_width(&mut self, width: u32) {
        assert!(width > 0, "wrap width must be at least one column");
        self.width = width;
        self.relayout();
    }

    pub fn model_line_count(&self) -> usize {
        self.first_view_line.len()
    }

    pub fn view_line_count(&self) -> usize {
        self.view_lines.len()
    }

    /// View lines of a 1-based model line; empty when out of range.
    pub fn view_lines_for_model_line(&self, line_number: u32) -> &[ViewLine] {
        match (line_number as usize).checked_sub(1) {
            Some(idx) if idx < self.first_view_line.len() => &self.view_lines[self.span(idx)],
            _ => &[],
        }
    }

    /// Inverse of the model to view mapping, clamped to the document.
    pub fn view_position_to_model_position(&self, position: Position) -> Position {
        let Some(last) = self.view_lines.len().checked_sub(1) else {
            return Position::start();
        };
        let line = &self.view_lines[(position.line_number as usize - 1).min(last)];
        let col = (position.column as usize - 1).min(line.len_chars());
        Position::new(
            (line.model_line + 1) as u32,
            (line.char_start + col + 1) as u32,
        )
    }

    fn span(&self, model_idx: usize) -> std::ops::Range<usize> {
        let start = self.first_view_line[model_idx];
        let end = self
            .first_view_line
            .get(model_idx + 1)
            .copied()
            .unwrap_or(self.view_lines.len());
        start..end
    }

    fn relayout(&mut self) {
        self.view_lines.clear();
        self.first_view_line.clear();
        for line_idx in 0..self.rope.len_lines() {
            self.first_view_line.push(self.view_lines.len());
            let text = self.rope.line(line_idx).to_string();
            self.layout_line(text.trim_end_matches(['\n', '\r']), line_idx);
        }
    }

    fn layout_line(&mut self, text: &str, line_idx: usize) {
        let wrap_width = match self.mode {
            WrapMode::None => usize::MAX,
            WrapMode::Char | WrapMode::Word => self.width as usize,
        };
        let word = self.mode == WrapMode::Word;

        let mut graphemes = Vec::new();
        let mut char_idx = 0;
        for g in text.graphemes(true) {
            let char_len = g.chars().count();
            graphemes.push(Grapheme {
                char_start: char_idx,
                char_len,
                width: g.width(),
                is_tab: g == "\t",
                is_whitespace: g.chars().all(char::is_whitespace),
            });
            char_idx += char_len;
        }

        let mut start = 0;
        let mut current_width = 0;
        // (char offset after the whitespace, grapheme index, width up to it)
        let mut last_break: Option<(usize, usize, usize)> = None;
        let mut i = 0;

        while i < graphemes.len() {
            let g = graphemes[i];
            let g_width = if g.is_tab {
                self.tab_width - current_width % self.tab_width
            } else {
                g.width
            };

            if word && g.is_whitespace {
                current_width += g_width;
                i += 1;
                last_break = Some((g.char_start + g.char_len, i, current_width));
                continue;
            }

            if current_width > 0 && current_width + g_width > wrap_width {
                let (break_char, break_index, break_width) = if word {
                    last_break.unwrap_or((g.char_start, i, current_width))
                } else {
                    (g.char_start, i, current_width)
                };
                self.view_lines.push(ViewLine {
                    model_line: line_idx,
                    char_start: start,
                    char_end: break_char,
                    width: break_width,
                    is_wrap: start > 0,
                });
                start = break_char;
                current_width = 0;
                last_break = None;
                i = break_index;
                continue;
            }

            current_width += g_width;
            i += 1;
        }

        self.view_lines.push(ViewLine {
            model_line: line_idx,
            char_start: start,
            char_end: char_idx,
            width: current_width,
            is_wrap: start > 0,
        });
    }
}

impl CoordinateConverter for WrappedLineMapping {
    fn model_position_to_view_position(&self, position: Position) -> Position {
        let Some(last_model) = self.first_view_line.len().checked_sub(1) else {
            return Position::start();
        };
        let span = self.span((position.line_number as usize - 1).min(last_model));
        let first = span.start;
        let lines = &self.view_lines[span];
        let line_len = lines.last().map_or(0, |l| l.char_end);
        let col = (position.column as usize - 1).min(line_len);

        // A column on a wrap boundary belongs to the next view line; the end
        // of the model line stays on its last view line.
        let offset = lines
            .iter()
            .position(|l| col < l.char_end)
            .unwrap_or(lines.len() - 1);
        let char_start = lines[offset].char_start;

        Position::new((first + offset + 1) as u32, (col - char_start + 1) as u32)
    }
}
