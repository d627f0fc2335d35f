//! Font metrics lookup.
//!
//! Layout never reads font files itself. It asks a [`FontMetrics`] provider for
//! per-face and per-glyph numbers, keyed by a [`FontKey`]. [`FontAtlas`] is an
//! in-memory provider for metrics loaded elsewhere (a bitmap font parser, a
//! rasterizer, or hand-written values in tests).

use std::sync::Arc;

use glyphfield_core::alloc::HashMap;

/// Identifies one face at one nominal size.
///
/// The size is stored rounded to whole pixels so it can be hashed. The cast
/// saturates: sizes above `u16::MAX` map to `u16::MAX` and NaN maps to 0.
/// [`TextFieldConfig::validate`](crate::TextFieldConfig::validate) rejects
/// both before a key is built from a config.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub family: Arc<str>,
    pub size_px: u16,
}

impl FontKey {
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size_px: size.round() as u16,
        }
    }

    pub fn size(&self) -> f32 {
        self.size_px as f32
    }
}

/// Face-wide metrics, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    /// Distance from the top of a line to the baseline.
    pub baseline: f32,
    pub line_height: f32,
}

/// Metrics for one renderable glyph, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Horizontal offset from the pen position to the glyph's left edge.
    pub x_offset: f32,
    /// Vertical offset from the top of the line to the glyph's top edge.
    pub y_offset: f32,
    pub width: f32,
    pub height: f32,
    /// Pen advance after drawing this glyph.
    pub advance: f32,
}

/// Advance used for characters without a renderable glyph.
///
/// `'\n'` takes no space, `'\t'` takes a full em, anything else half an em.
pub fn fallback_advance(ch: char, nominal_size: f32) -> f32 {
    match ch {
        '\n' => 0.0,
        '\t' => nominal_size,
        _ => nominal_size * 0.5,
    }
}

/// Source of font and glyph metrics.
///
/// A missing glyph is not an error: layout falls back to
/// [`fallback_advance`] and leaves the glyph slot empty.
pub trait FontMetrics {
    fn face(&self, key: &FontKey) -> Option<FaceMetrics>;

    fn glyph(&self, key: &FontKey, ch: char) -> Option<GlyphMetrics>;

    /// Pen advance for `ch`, falling back to [`fallback_advance`].
    ///
    /// `nominal_size` is the unrounded size the key was built from; the
    /// key's own size is rounded and only identifies the face.
    fn advance_width(&self, key: &FontKey, ch: char, nominal_size: f32) -> f32 {
        self.glyph(key, ch)
            .map_or_else(|| fallback_advance(ch, nominal_size), |glyph| glyph.advance)
    }
}

impl<T: FontMetrics + ?Sized> FontMetrics for Arc<T> {
    fn face(&self, key: &FontKey) -> Option<FaceMetrics> {
        (**self).face(key)
    }

    fn glyph(&self, key: &FontKey, ch: char) -> Option<GlyphMetrics> {
        (**self).glyph(key, ch)
    }

    fn advance_width(&self, key: &FontKey, ch: char, nominal_size: f32) -> f32 {
        (**self).advance_width(key, ch, nominal_size)
    }
}

#[derive(Debug, Clone)]
struct FaceEntry {
    metrics: FaceMetrics,
    glyphs: HashMap<char, GlyphMetrics>,
}

/// In-memory [`FontMetrics`] registry.
///
/// ```
/// use glyphfield_text::{FaceMetrics, FontAtlas, FontKey, FontMetrics, GlyphMetrics};
///
/// let key = FontKey::new("mono", 42.0);
/// let mut atlas = FontAtlas::new();
/// atlas.insert_face(key.clone(), FaceMetrics { baseline: 34.0, line_height: 42.0 });
/// atlas.insert_glyph(&key, 'a', GlyphMetrics {
///     x_offset: 1.0,
///     y_offset: 12.0,
///     width: 19.0,
///     height: 22.0,
///     advance: 21.0,
/// });
///
/// assert_eq!(atlas.advance_width(&key, 'a', 42.0), 21.0);
/// assert_eq!(atlas.advance_width(&key, 'b', 42.0), 21.0); // half-em fallback
/// ```
#[derive(Debug, Clone, Default)]
pub struct FontAtlas {
    faces: HashMap<FontKey, FaceEntry>,
}

impl FontAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a face, replacing any glyphs previously stored under `key`.
    pub fn insert_face(&mut self, key: FontKey, metrics: FaceMetrics) {
        tracing::debug!(family = %key.family, size = key.size_px, "registered font face");
        self.faces.insert(
            key,
            FaceEntry {
                metrics,
                glyphs: HashMap::new(),
            },
        );
    }

    /// Add a glyph to a registered face. Returns `false` if the face is unknown.
    pub fn insert_glyph(&mut self, key: &FontKey, ch: char, glyph: GlyphMetrics) -> bool {
        match self.faces.get_mut(key) {
            Some(face) => {
                face.glyphs.insert(ch, glyph);
                true
            }
            None => {
                tracing::warn!(family = %key.family, size = key.size_px, "glyph added to unregistered face");
                false
            }
        }
    }

    pub fn contains(&self, key: &FontKey) -> bool {
        self.faces.contains_key(key)
    }

    pub fn glyph_count(&self, key: &FontKey) -> usize {
        self.faces.get(key).map_or(0, |face| face.glyphs.len())
    }
}

impl FontMetrics for FontAtlas {
    fn face(&self, key: &FontKey) -> Option<FaceMetrics> {
        self.faces.get(key).map(|face| face.metrics)
    }

    fn glyph(&self, key: &FontKey, ch: char) -> Option<GlyphMetrics> {
        self.faces.get(key)?.glyphs.get(&ch).copied()
    }
}
