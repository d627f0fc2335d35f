use crate::align::TextAnchor;
use crate::classify::CharClasses;
use crate::error::{TextError, TextResult};
use crate::font::FontKey;

/// Inclusive size bounds for one container axis.
///
/// Only `max` limits layout; `min` is kept for callers that clamp the
/// container themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    pub min: f32,
    pub max: f32,
}

impl SizeRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub(crate) fn validate(self, axis: &'static str) -> TextResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(TextError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Everything a text field lays out from.
///
/// Sizes are in pixels except `nominal_size`, which is the size the font's
/// metrics were authored at. Glyphs are scaled by `rendered_size / nominal_size`.
///
/// ```
/// use glyphfield_text::{SizeRange, TextAnchor, TextFieldConfig};
///
/// let config = TextFieldConfig::new("Hello, World!")
///     .font("mono")
///     .nominal_size(42.0)
///     .rendered_size(21.0)
///     .width_range(SizeRange::new(0.0, 300.0))
///     .alignment(TextAnchor::MiddleCenter);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldConfig {
    pub(crate) text: String,
    pub(crate) font: String,
    pub(crate) nominal_size: f32,
    pub(crate) rendered_size: f32,
    pub(crate) width_range: Option<SizeRange>,
    pub(crate) height_range: Option<SizeRange>,
    pub(crate) padding: f32,
    pub(crate) line_spacing: f32,
    pub(crate) hide_overflow: bool,
    pub(crate) alignment: TextAnchor,
    pub(crate) classes: CharClasses,
}

impl TextFieldConfig {
    pub const DEFAULT_FONT: &'static str = "sans-serif";
    pub const DEFAULT_NOMINAL_SIZE: f32 = 42.0;
    pub const DEFAULT_RENDERED_SIZE: f32 = 14.0;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Self::DEFAULT_FONT.to_owned(),
            nominal_size: Self::DEFAULT_NOMINAL_SIZE,
            rendered_size: Self::DEFAULT_RENDERED_SIZE,
            width_range: None,
            height_range: None,
            padding: 0.0,
            line_spacing: 1.0,
            hide_overflow: true,
            alignment: TextAnchor::UpperLeft,
            classes: CharClasses::default(),
        }
    }

    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font = family.into();
        self
    }

    pub fn nominal_size(mut self, size: f32) -> Self {
        self.nominal_size = size;
        self
    }

    pub fn rendered_size(mut self, size: f32) -> Self {
        self.rendered_size = size;
        self
    }

    pub fn width_range(mut self, range: SizeRange) -> Self {
        self.width_range = Some(range);
        self
    }

    pub fn height_range(mut self, range: SizeRange) -> Self {
        self.height_range = Some(range);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn hide_overflow(mut self, hide: bool) -> Self {
        self.hide_overflow = hide;
        self
    }

    pub fn alignment(mut self, anchor: TextAnchor) -> Self {
        self.alignment = anchor;
        self
    }

    pub fn char_classes(mut self, classes: CharClasses) -> Self {
        self.classes = classes;
        self
    }

    pub fn line_break_chars(mut self, chars: impl Into<String>) -> Self {
        self.classes.set_line_break(chars);
        self
    }

    pub fn printed_delimiters(mut self, chars: impl Into<String>) -> Self {
        self.classes.set_printed(chars);
        self
    }

    pub fn strippable_delimiters(mut self, chars: impl Into<String>) -> Self {
        self.classes.set_strippable(chars);
        self
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn get_font(&self) -> &str {
        &self.font
    }

    pub fn get_nominal_size(&self) -> f32 {
        self.nominal_size
    }

    pub fn get_rendered_size(&self) -> f32 {
        self.rendered_size
    }

    pub fn get_width_range(&self) -> Option<SizeRange> {
        self.width_range
    }

    pub fn get_height_range(&self) -> Option<SizeRange> {
        self.height_range
    }

    pub fn get_padding(&self) -> f32 {
        self.padding
    }

    pub fn get_line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn get_hide_overflow(&self) -> bool {
        self.hide_overflow
    }

    pub fn get_alignment(&self) -> TextAnchor {
        self.alignment
    }

    pub fn get_char_classes(&self) -> &CharClasses {
        &self.classes
    }

    /// Metrics key for the configured face at its nominal size.
    pub fn font_key(&self) -> FontKey {
        FontKey::new(self.font.as_str(), self.nominal_size)
    }

    /// Rendered pixels per font unit.
    pub fn pixels_per_unit(&self) -> f32 {
        self.rendered_size / self.nominal_size
    }

    /// Check that sizes, ranges and spacing can produce a finite layout.
    ///
    /// The nominal size must also fit the `u16` a [`FontKey`] rounds it to.
    pub fn validate(&self) -> TextResult<()> {
        check_nominal_size(self.nominal_size)?;
        check_rendered_size(self.rendered_size)?;
        if let Some(range) = self.width_range {
            range.validate("width")?;
        }
        if let Some(range) = self.height_range {
            range.validate("height")?;
        }
        check_padding(self.padding)?;
        check_line_spacing(self.line_spacing)
    }
}

pub(crate) fn check_nominal_size(value: f32) -> TextResult<()> {
    if !value.is_finite() || value <= 0.0 || value.round() > f32::from(u16::MAX) {
        return Err(TextError::InvalidFontSize {
            name: "nominal",
            value,
        });
    }
    Ok(())
}

pub(crate) fn check_rendered_size(value: f32) -> TextResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TextError::InvalidFontSize {
            name: "rendered",
            value,
        });
    }
    Ok(())
}

pub(crate) fn check_padding(value: f32) -> TextResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TextError::InvalidPadding(value));
    }
    Ok(())
}

pub(crate) fn check_line_spacing(value: f32) -> TextResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TextError::InvalidLineSpacing(value));
    }
    Ok(())
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self::new("")
    }
}
