//! Character classification for line wrapping.

/// The role a character plays while wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Ends the current line. Never part of any output line.
    LineBreak,
    /// A break opportunity that stays at the end of the line it terminates (e.g. `-`).
    PrintedDelimiter,
    /// A break opportunity that may be dropped at a line edge (e.g. space, tab).
    StrippableDelimiter,
    /// Any other character.
    Word,
}

/// The three character sets that drive classification.
///
/// A character may appear in more than one set. Lookup order is line break,
/// then printed delimiter, then strippable delimiter; the first match wins and
/// anything else is [`CharClass::Word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClasses {
    line_break: String,
    printed: String,
    strippable: String,
}

impl CharClasses {
    pub const DEFAULT_LINE_BREAK: &'static str = "\n";
    pub const DEFAULT_PRINTED: &'static str = " -";
    pub const DEFAULT_STRIPPABLE: &'static str = " \t";

    pub fn new(
        line_break: impl Into<String>,
        printed: impl Into<String>,
        strippable: impl Into<String>,
    ) -> Self {
        Self {
            line_break: line_break.into(),
            printed: printed.into(),
            strippable: strippable.into(),
        }
    }

    pub fn line_break(&self) -> &str {
        &self.line_break
    }

    pub fn printed(&self) -> &str {
        &self.printed
    }

    pub fn strippable(&self) -> &str {
        &self.strippable
    }

    pub fn set_line_break(&mut self, chars: impl Into<String>) {
        self.line_break = chars.into();
    }

    pub fn set_printed(&mut self, chars: impl Into<String>) {
        self.printed = chars.into();
    }

    pub fn set_strippable(&mut self, chars: impl Into<String>) {
        self.strippable = chars.into();
    }

    pub fn classify(&self, ch: char) -> CharClass {
        if self.line_break.contains(ch) {
            CharClass::LineBreak
        } else if self.printed.contains(ch) {
            CharClass::PrintedDelimiter
        } else if self.strippable.contains(ch) {
            CharClass::StrippableDelimiter
        } else {
            CharClass::Word
        }
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_LINE_BREAK,
            Self::DEFAULT_PRINTED,
            Self::DEFAULT_STRIPPABLE,
        )
    }
}
