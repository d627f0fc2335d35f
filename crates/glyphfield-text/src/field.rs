//! Text field component.
//!
//! [`TextField`] owns a configuration together with the quads its last layout
//! produced. Any setter that changes a value releases every quad back to the
//! factory and lays the field out again from scratch.

use std::sync::Arc;

use glyphfield_core::color::Color;
use glyphfield_core::geometry::Size;

use crate::align::TextAnchor;
use crate::classify::CharClasses;
use crate::config::{
    SizeRange, TextFieldConfig, check_line_spacing, check_nominal_size, check_padding,
    check_rendered_size,
};
use crate::container::Container;
use crate::error::TextResult;
use crate::font::FontMetrics;
use crate::layout::{TextLayoutEngine, TextLine};
use crate::quad::{GlyphQuad, QuadFactory};

/// A laid-out, styled block of text inside a container.
///
/// ```
/// use std::sync::Arc;
/// use glyphfield_text::{FontAtlas, QuadPool, TextField, TextFieldConfig, UiRect};
///
/// let fonts = Arc::new(FontAtlas::new());
/// let mut field = TextField::from_config(
///     TextFieldConfig::new("Hello"),
///     UiRect::new(200.0, 50.0),
///     fonts,
///     QuadPool::new(),
/// )
/// .unwrap();
///
/// field.set_text("Hello\nWorld");
/// assert_eq!(field.line_count(), 2);
/// ```
pub struct TextField<F, C, P>
where
    F: FontMetrics + ?Sized,
    C: Container,
    P: QuadFactory,
{
    config: TextFieldConfig,
    container: C,
    fonts: Arc<F>,
    factory: P,
    engine: TextLayoutEngine,
    lines: Vec<TextLine<P::Quad>>,
    color: Color,
    visible: bool,
}

impl<F, C, P> TextField<F, C, P>
where
    F: FontMetrics + ?Sized,
    C: Container,
    P: QuadFactory,
{
    /// Create a field with default configuration and lay it out.
    pub fn new(container: C, fonts: Arc<F>, factory: P) -> Self {
        Self::with_config_unchecked(TextFieldConfig::default(), container, fonts, factory)
    }

    /// Create a field from a validated configuration and lay it out.
    pub fn from_config(
        config: TextFieldConfig,
        container: C,
        fonts: Arc<F>,
        factory: P,
    ) -> TextResult<Self> {
        config.validate()?;
        Ok(Self::with_config_unchecked(config, container, fonts, factory))
    }

    fn with_config_unchecked(
        config: TextFieldConfig,
        container: C,
        fonts: Arc<F>,
        factory: P,
    ) -> Self {
        let mut field = Self {
            config,
            container,
            fonts,
            factory,
            engine: TextLayoutEngine::new(),
            lines: Vec::new(),
            color: Color::WHITE,
            visible: true,
        };
        field.relayout();
        field
    }

    pub fn config(&self) -> &TextFieldConfig {
        &self.config
    }

    /// Replace the whole configuration after validating it.
    pub fn set_config(&mut self, config: TextFieldConfig) -> TextResult<()> {
        config.validate()?;
        if self.config != config {
            self.config = config;
            self.relayout();
        }
        Ok(())
    }

    pub fn lines(&self) -> &[TextLine<P::Quad>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Every live quad in document order.
    pub fn quads(&self) -> impl Iterator<Item = &P::Quad> {
        self.lines
            .iter()
            .flat_map(|line| line.quads.iter().flatten())
    }

    pub fn glyph_count(&self) -> usize {
        self.lines.iter().map(TextLine::glyph_count).sum()
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn factory(&self) -> &P {
        &self.factory
    }

    pub fn text(&self) -> &str {
        &self.config.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.config.text != text {
            self.config.text = text;
            self.relayout();
        }
    }

    pub fn set_font(&mut self, family: impl Into<String>) {
        let family = family.into();
        if self.config.font != family {
            self.config.font = family;
            self.relayout();
        }
    }

    /// Rejected values leave the field and its quads untouched.
    pub fn set_nominal_size(&mut self, size: f32) -> TextResult<()> {
        check_nominal_size(size)?;
        if self.config.nominal_size != size {
            self.config.nominal_size = size;
            self.relayout();
        }
        Ok(())
    }

    pub fn set_rendered_size(&mut self, size: f32) -> TextResult<()> {
        check_rendered_size(size)?;
        if self.config.rendered_size != size {
            self.config.rendered_size = size;
            self.relayout();
        }
        Ok(())
    }

    pub fn set_width_range(&mut self, range: Option<SizeRange>) -> TextResult<()> {
        if let Some(range) = range {
            range.validate("width")?;
        }
        if self.config.width_range != range {
            self.config.width_range = range;
            self.relayout();
        }
        Ok(())
    }

    pub fn set_height_range(&mut self, range: Option<SizeRange>) -> TextResult<()> {
        if let Some(range) = range {
            range.validate("height")?;
        }
        if self.config.height_range != range {
            self.config.height_range = range;
            self.relayout();
        }
        Ok(())
    }

    pub fn set_padding(&mut self, padding: f32) -> TextResult<()> {
        check_padding(padding)?;
        if self.config.padding != padding {
            self.config.padding = padding;
            self.relayout();
        }
        Ok(())
    }

    pub fn set_line_spacing(&mut self, spacing: f32) -> TextResult<()> {
        check_line_spacing(spacing)?;
        if self.config.line_spacing != spacing {
            self.config.line_spacing = spacing;
            self.relayout();
        }
        Ok(())
    }

    pub fn set_hide_overflow(&mut self, hide: bool) {
        if self.config.hide_overflow != hide {
            self.config.hide_overflow = hide;
            self.relayout();
        }
    }

    pub fn set_alignment(&mut self, anchor: TextAnchor) {
        if self.config.alignment != anchor {
            self.config.alignment = anchor;
            self.relayout();
        }
    }

    pub fn set_char_classes(&mut self, classes: CharClasses) {
        if self.config.classes != classes {
            self.config.classes = classes;
            self.relayout();
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Tint every quad. Does not relayout.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        for quad in self.quads_mut() {
            quad.set_color(color);
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide every quad. Does not relayout.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        for quad in self.quads_mut() {
            quad.set_visible(visible);
        }
    }

    /// Resize the container directly and relayout against the new size.
    pub fn resize_container(&mut self, size: Size<f32>) {
        self.container.resize(size);
        self.relayout();
    }

    /// Relayout after the container was resized by someone else.
    pub fn on_container_resized(&mut self) {
        self.relayout();
    }

    /// Release the current quads and lay the field out again.
    pub fn relayout(&mut self) {
        self.release_quads();
        self.lines =
            self.engine
                .layout(&self.config, &mut self.container, &*self.fonts, &mut self.factory);

        let (color, visible) = (self.color, self.visible);
        for quad in self.quads_mut() {
            quad.set_color(color);
            quad.set_visible(visible);
        }
    }

    fn quads_mut(&mut self) -> impl Iterator<Item = &mut P::Quad> {
        self.lines
            .iter_mut()
            .flat_map(|line| line.quads.iter_mut().flatten())
    }

    fn release_quads(&mut self) {
        for line in self.lines.drain(..) {
            for quad in line.quads.into_iter().flatten() {
                self.factory.release_quad(quad);
            }
        }
    }
}

impl<F, C, P> Drop for TextField<F, C, P>
where
    F: FontMetrics + ?Sized,
    C: Container,
    P: QuadFactory,
{
    fn drop(&mut self) {
        self.release_quads();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::UiRect;
    use crate::font::{FaceMetrics, FontAtlas, FontKey, GlyphMetrics};
    use crate::quad::QuadPool;

    fn atlas() -> Arc<FontAtlas> {
        let key = FontKey::new("unit", 10.0);
        let mut atlas = FontAtlas::new();
        atlas.insert_face(
            key.clone(),
            FaceMetrics {
                baseline: 8.0,
                line_height: 10.0,
            },
        );
        for ch in 'a'..='z' {
            atlas.insert_glyph(
                &key,
                ch,
                GlyphMetrics {
                    x_offset: 0.0,
                    y_offset: 0.0,
                    width: 1.0,
                    height: 8.0,
                    advance: 1.0,
                },
            );
        }
        Arc::new(atlas)
    }

    fn field(text: &str) -> TextField<FontAtlas, UiRect, QuadPool> {
        let config = TextFieldConfig::new(text)
            .font("unit")
            .nominal_size(10.0)
            .rendered_size(10.0);
        TextField::from_config(config, UiRect::new(100.0, 100.0), atlas(), QuadPool::new())
            .unwrap()
    }

    #[test]
    fn test_relayout_releases_previous_quads() {
        let mut field = field("abc");
        assert_eq!(field.glyph_count(), 3);
        assert_eq!(field.factory().live(), 3);

        field.set_text("de");
        assert_eq!(field.glyph_count(), 2);
        assert_eq!(field.factory().live(), 2);
        assert!(field.factory().pooled() >= 1);
    }

    #[test]
    fn test_unchanged_setter_is_noop() {
        let mut field = field("abc");
        let before = field.factory().pooled();
        field.set_text("abc");
        field.set_padding(0.0).unwrap();
        assert_eq!(field.factory().pooled(), before);
    }

    #[test]
    fn test_invalid_setter_keeps_layout() {
        let mut field = field("abc");
        let before = field.factory().pooled();

        assert!(field.set_nominal_size(0.0).is_err());
        assert!(field.set_rendered_size(f32::INFINITY).is_err());
        assert!(field.set_line_spacing(-2.0).is_err());
        assert!(field.set_padding(f32::NAN).is_err());
        assert!(field.set_width_range(Some(SizeRange::new(9.0, 1.0))).is_err());
        assert!(field.set_height_range(Some(SizeRange::new(0.0, f32::NAN))).is_err());

        assert_eq!(field.config().get_nominal_size(), 10.0);
        assert_eq!(field.config().get_width_range(), None);
        assert_eq!(field.factory().pooled(), before);
        assert!(field.quads().all(|q| q.position.x.is_finite() && q.position.y.is_finite()));

        field.set_nominal_size(20.0).unwrap();
        assert_eq!(field.config().get_nominal_size(), 20.0);
    }

    #[test]
    fn test_color_and_visibility_survive_relayout() {
        let mut field = field("ab");
        field.set_color(Color::BLACK);
        field.set_visible(false);
        field.set_text("xyz");
        assert!(field.quads().all(|q| q.color == Color::BLACK && !q.visible));
    }

    #[test]
    fn test_set_config_validates() {
        let mut field = field("ab");
        let bad = field.config().clone().line_spacing(-1.0);
        assert!(field.set_config(bad).is_err());
        assert_eq!(field.config().get_line_spacing(), 1.0);
    }

    #[test]
    fn test_resize_container_relayouts() {
        let mut field = field("abcdef");
        assert_eq!(field.line_count(), 1);
        field.resize_container(Size::new(4.0, 100.0));
        assert_eq!(field.lines()[0].text(), "abcd");
        assert_eq!(field.lines()[1].text(), "ef");
    }
}
