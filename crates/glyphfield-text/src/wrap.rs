//! Greedy word wrapping.
//!
//! [`LineWrapper`] turns a string into lines no wider than a maximum width,
//! breaking after printed delimiters and around strippable delimiters. It is a
//! single left-to-right pass; every character is measured once.
//!
//! Strippable delimiters never survive at a line edge. A line's text starts at
//! its first word and ends at its last closed word, so spaces and tabs around a
//! break (explicit or wrapped) are dropped from both the text and the width.
//! Interior strippable delimiters are kept and charged once the next word closes.
//!
//! # Example
//!
//! ```
//! use glyphfield_text::{CharClasses, LineWrapper};
//!
//! let wrapper = LineWrapper::new(CharClasses::default());
//! let wrapped = wrapper.wrap("hello world", Some(8.0), |_| 1.0);
//! assert_eq!(wrapped.texts().collect::<Vec<_>>(), ["hello ", "world"]);
//! ```

use glyphfield_core::profiling::profile_function;

use crate::classify::{CharClass, CharClasses};

/// One output line.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// Line content. Never contains line-break characters.
    pub text: String,
    /// Accumulated advance width in the units of the width function.
    pub width: f32,
    /// `true` when the line ended because the next character did not fit,
    /// `false` when it ended at a line break or the end of the text.
    pub wrapped: bool,
}

/// Result of a wrap pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedText {
    pub lines: Vec<WrappedLine>,
    /// Width of the widest line, in the units of the width function.
    pub widest_line_width: f32,
}

impl WrappedText {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    pub fn line_widths(&self) -> impl Iterator<Item = f32> + '_ {
        self.lines.iter().map(|line| line.width)
    }

    /// Widest line measured in multiples of the nominal font size.
    pub fn widest_line_width_in_line_heights(&self, nominal_size: f32) -> f32 {
        self.widest_line_width / nominal_size
    }

    /// Drop every line past `max_lines`. Widest width is left untouched.
    pub fn truncate(&mut self, max_lines: usize) {
        self.lines.truncate(max_lines);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Splits text into lines using a [`CharClasses`] policy.
#[derive(Debug, Clone, Default)]
pub struct LineWrapper {
    classes: CharClasses,
}

impl LineWrapper {
    pub fn new(classes: CharClasses) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// Wrap `text` so that lines fit in `max_width` where possible.
    ///
    /// `None` means unbounded: only line-break characters end a line. A word or
    /// character that cannot fit on an empty line is still emitted, split at
    /// the width boundary or alone. Always yields at least one line.
    pub fn wrap<F>(&self, text: &str, max_width: Option<f32>, mut width_of: F) -> WrappedText
    where
        F: FnMut(char) -> f32,
    {
        wrap_text(&self.classes, text, max_width, &mut width_of)
    }
}

/// [`LineWrapper::wrap`] without owning the classification sets.
pub fn wrap_text<F>(
    classes: &CharClasses,
    text: &str,
    max_width: Option<f32>,
    mut width_of: F,
) -> WrappedText
where
    F: FnMut(char) -> f32,
{
    profile_function!();

    let mut state = WrapState::new(text, max_width.unwrap_or(f32::INFINITY));
    for (idx, ch) in text.char_indices() {
        match classes.classify(ch) {
            CharClass::LineBreak => state.line_break(idx, ch.len_utf8()),
            CharClass::PrintedDelimiter => {
                state.printed_delimiter(idx, ch.len_utf8(), width_of(ch))
            }
            CharClass::StrippableDelimiter => state.strippable_delimiter(idx, width_of(ch)),
            CharClass::Word => state.word_char(idx, width_of(ch)),
        }
    }
    let wrapped = state.finish();

    tracing::trace!(
        lines = wrapped.lines.len(),
        widest = wrapped.widest_line_width,
        "wrapped {} bytes",
        text.len()
    );
    wrapped
}

#[derive(Debug, Clone, Copy)]
struct OpenWord {
    start: usize,
    width: f32,
}

/// Accumulator for a single wrap pass. Indices are byte offsets into `text`.
#[derive(Debug)]
struct WrapState<'a> {
    text: &'a str,
    max_width: f32,
    lines: Vec<WrappedLine>,
    line_start: usize,
    line_end: usize,
    /// Width of the closed words on the current line, plus the strippable
    /// delimiters between them.
    line_width: f32,
    /// No word has been closed on the current line yet.
    in_first_word: bool,
    /// Strippable width seen since the last closed word, charged only when a
    /// following word closes on the same line.
    strippable_width: f32,
    word: Option<OpenWord>,
    widest_line_width: f32,
}

impl<'a> WrapState<'a> {
    fn new(text: &'a str, max_width: f32) -> Self {
        Self {
            text,
            max_width,
            lines: Vec::new(),
            line_start: 0,
            line_end: 0,
            line_width: 0.0,
            in_first_word: true,
            strippable_width: 0.0,
            word: None,
            widest_line_width: 0.0,
        }
    }

    fn line_width_with_current_word(&self) -> f32 {
        let word_width = self.word.map_or(0.0, |word| word.width);
        if self.in_first_word {
            word_width
        } else {
            self.line_width + self.strippable_width + word_width
        }
    }

    fn close_word(&mut self, end: usize) {
        let Some(word) = self.word else {
            return;
        };
        self.line_width = self.line_width_with_current_word();
        if self.in_first_word {
            self.line_start = word.start;
        }
        self.line_end = end;
        self.strippable_width = 0.0;
        self.in_first_word = false;
        self.word = None;
    }

    fn flush_line(&mut self, wrapped: bool) {
        let text = if self.in_first_word {
            String::new()
        } else {
            self.text[self.line_start..self.line_end].to_owned()
        };
        self.widest_line_width = self.widest_line_width.max(self.line_width);
        self.lines.push(WrappedLine {
            text,
            width: self.line_width,
            wrapped,
        });
        self.line_start = self.line_end;
        self.line_width = 0.0;
        self.strippable_width = 0.0;
        self.in_first_word = true;
    }

    fn line_break(&mut self, idx: usize, len: usize) {
        self.close_word(idx);
        self.flush_line(false);
        self.line_start = idx + len;
        self.line_end = self.line_start;
    }

    fn word_char(&mut self, idx: usize, width: f32) {
        if self.line_width_with_current_word() + width > self.max_width {
            if !self.in_first_word {
                // Move the open word, if any, to a fresh line.
                self.flush_line(true);
            } else if self.word.is_some() {
                // The word alone is too wide: break it before this character.
                self.close_word(idx);
                self.flush_line(true);
            }
            // An empty line takes the character regardless of its width.
        }
        let word = self.word.get_or_insert(OpenWord {
            start: idx,
            width: 0.0,
        });
        word.width += width;
    }

    fn printed_delimiter(&mut self, idx: usize, len: usize, width: f32) {
        self.word_char(idx, width);
        self.close_word(idx + len);
    }

    fn strippable_delimiter(&mut self, idx: usize, width: f32) {
        self.close_word(idx);
        self.strippable_width += width;
    }

    fn finish(mut self) -> WrappedText {
        self.close_word(self.text.len());
        self.flush_line(false);
        WrappedText {
            lines: self.lines,
            widest_line_width: self.widest_line_width,
        }
    }
}
