//! Glyph layout for a text field.
//!
//! A pass runs in four phases, each reading only the previous phase's output:
//!
//! 1. Wrap the text against the container (or the configured range maximum),
//!    minus padding, converted to font units.
//! 2. Resize the container to the content when width or height ranges are set.
//! 3. Walk each line placing one quad per renderable glyph.
//! 4. Shift every line for the configured [`TextAnchor`](crate::TextAnchor).
//!
//! Alignment needs every line's final width, so it always runs after placement
//! of the whole field has finished.

use glyphfield_core::geometry::Size;
use glyphfield_core::math::Vec2;
use glyphfield_core::profiling::{profile_function, profile_scope};

use crate::align::{Horizontal, Vertical};
use crate::config::TextFieldConfig;
use crate::container::Container;
use crate::font::{FontKey, FontMetrics, fallback_advance};
use crate::quad::{GlyphQuad, QuadFactory};
use crate::wrap::{WrappedText, wrap_text};

/// One laid-out line.
///
/// `chars` and `quads` always have the same length. A `None` quad marks a
/// character with no renderable glyph, so character indices map directly to
/// quad indices.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine<Q> {
    pub chars: Vec<char>,
    pub quads: Vec<Option<Q>>,
    /// Pen offset after the last character, in font units.
    pub width: f32,
    pub index: usize,
}

impl<Q> TextLine<Q> {
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Number of characters that produced a quad.
    pub fn glyph_count(&self) -> usize {
        self.quads.iter().filter(|quad| quad.is_some()).count()
    }
}

/// Stateless layout driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLayoutEngine;

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a full layout pass.
    ///
    /// The container may be resized once (see [`TextLayoutEngine::wrap_and_fit`]);
    /// glyphs are positioned against its size after that request.
    pub fn layout<C, F, P>(
        &self,
        config: &TextFieldConfig,
        container: &mut C,
        fonts: &F,
        factory: &mut P,
    ) -> Vec<TextLine<P::Quad>>
    where
        C: Container + ?Sized,
        F: FontMetrics + ?Sized,
        P: QuadFactory + ?Sized,
    {
        profile_function!();

        let key = config.font_key();
        let wrapped = self.wrap_and_fit(config, container, fonts, &key);
        let size = container.size();
        let mut lines = self.place_glyphs(config, size, fonts, &key, factory, &wrapped);
        self.align(config, size, &mut lines);

        tracing::trace!(
            lines = lines.len(),
            width = size.width,
            height = size.height,
            "laid out text field"
        );
        lines
    }

    /// Wrap the configured text and, when ranges are configured, fit the
    /// container to it.
    ///
    /// Lines past the visible line count are dropped when `hide_overflow` is
    /// set. The widest width still covers the dropped lines.
    pub fn wrap_and_fit<C, F>(
        &self,
        config: &TextFieldConfig,
        container: &mut C,
        fonts: &F,
        key: &FontKey,
    ) -> WrappedText
    where
        C: Container + ?Sized,
        F: FontMetrics + ?Sized,
    {
        let current = container.size();
        let bound = Size::new(
            config.width_range.map_or(current.width, |range| range.max),
            config.height_range.map_or(current.height, |range| range.max),
        );
        let units_per_pixel = config.nominal_size / config.rendered_size;
        let max_units = bound.inset(config.padding) * units_per_pixel;

        let nominal = config.nominal_size;
        let mut wrapped = wrap_text(&config.classes, &config.text, Some(max_units.width), |ch| {
            fonts.advance_width(key, ch, nominal)
        });

        if config.hide_overflow {
            let max_lines = (max_units.height / (config.nominal_size * config.line_spacing)).floor();
            // Saturating cast: negative and NaN become zero lines.
            wrapped.truncate(max_lines as usize);
        }

        if config.width_range.is_some() || config.height_range.is_some() {
            let content_width =
                wrapped.widest_line_width * config.pixels_per_unit() + 2.0 * config.padding;
            let content_height = wrapped.len() as f32 * config.line_spacing * config.rendered_size
                + 2.0 * config.padding;
            let fitted = Size::new(
                config
                    .width_range
                    .map_or(current.width, |range| range.max.min(content_width)),
                config
                    .height_range
                    .map_or(current.height, |range| range.max.min(content_height)),
            );
            tracing::debug!(
                width = fitted.width,
                height = fitted.height,
                "resizing text container to content"
            );
            container.resize(fitted);
        }

        wrapped
    }

    fn place_glyphs<F, P>(
        &self,
        config: &TextFieldConfig,
        size: Size<f32>,
        fonts: &F,
        key: &FontKey,
        factory: &mut P,
        wrapped: &WrappedText,
    ) -> Vec<TextLine<P::Quad>>
    where
        F: FontMetrics + ?Sized,
        P: QuadFactory + ?Sized,
    {
        profile_scope!("place_glyphs");

        let scale = config.pixels_per_unit();
        let baseline = match fonts.face(key) {
            Some(face) => face.baseline,
            None => {
                tracing::warn!(family = %key.family, size = key.size_px, "no metrics for font face");
                0.0
            }
        };
        let origin = Vec2::new(config.padding, size.height - config.padding);

        let mut lines = Vec::with_capacity(wrapped.len());
        for (index, wrapped_line) in wrapped.lines.iter().enumerate() {
            let mut line = TextLine {
                chars: Vec::with_capacity(wrapped_line.text.len()),
                quads: Vec::with_capacity(wrapped_line.text.len()),
                width: 0.0,
                index,
            };
            let mut offset_x = 0.0;

            for ch in wrapped_line.text.chars() {
                let glyph = fonts.glyph(key, ch);
                let advance = glyph.map_or_else(
                    || fallback_advance(ch, config.nominal_size),
                    |glyph| glyph.advance,
                );
                let quad = glyph.map(|glyph| {
                    let mut quad = factory.spawn_quad();
                    quad.set_sprite(glyph);
                    quad.set_position(Vec2::new(
                        (offset_x + glyph.x_offset) * scale + origin.x,
                        (baseline - glyph.height - glyph.y_offset - baseline) * scale + origin.y,
                    ));
                    quad.set_size(Vec2::new(glyph.width, glyph.height) * scale);
                    quad
                });
                offset_x += advance;
                line.chars.push(ch);
                line.quads.push(quad);
            }

            line.width = offset_x;
            lines.push(line);
        }
        lines
    }

    fn align<Q: GlyphQuad>(
        &self,
        config: &TextFieldConfig,
        size: Size<f32>,
        lines: &mut [TextLine<Q>],
    ) {
        profile_scope!("align_lines");

        let (vertical, horizontal) = config.alignment.axes();
        let scale = config.pixels_per_unit();
        let content = size.inset(config.padding) * (config.nominal_size / config.rendered_size);

        self.align_vertical(config, vertical, content.height, scale, lines);
        self.align_horizontal(horizontal, content.width, scale, lines);
    }

    fn align_vertical<Q: GlyphQuad>(
        &self,
        config: &TextFieldConfig,
        vertical: Vertical,
        content_height: f32,
        scale: f32,
        lines: &mut [TextLine<Q>],
    ) {
        let line_advance = config.nominal_size * scale * config.line_spacing;
        let block_height = lines.len() as f32 * config.nominal_size * config.line_spacing;
        let block_offset = match vertical {
            Vertical::Upper => 0.0,
            Vertical::Middle => (content_height - block_height) * 0.5 * scale,
            Vertical::Lower => (content_height - block_height) * scale,
        };

        for line in lines.iter_mut() {
            let offset = block_offset + line.index as f32 * line_advance;
            if offset == 0.0 {
                continue;
            }
            for quad in line.quads.iter_mut().flatten() {
                quad.translate(Vec2::new(0.0, -offset));
            }
        }
    }

    fn align_horizontal<Q: GlyphQuad>(
        &self,
        horizontal: Horizontal,
        content_width: f32,
        scale: f32,
        lines: &mut [TextLine<Q>],
    ) {
        let factor = match horizontal {
            Horizontal::Left => return,
            Horizontal::Center => 0.5,
            Horizontal::Right => 1.0,
        };

        for line in lines.iter_mut() {
            let offset = (content_width - line.width) * factor * scale;
            for quad in line.quads.iter_mut().flatten() {
                quad.translate(Vec2::new(offset, 0.0));
            }
        }
    }
}
