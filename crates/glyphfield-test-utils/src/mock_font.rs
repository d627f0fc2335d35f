//! Mock font metrics with predictable advances.

use glyphfield_core::alloc::{HashMap, HashSet};
use glyphfield_text::{FaceMetrics, FontKey, FontMetrics, GlyphMetrics};
use parking_lot::Mutex;

/// A [`FontMetrics`] provider where every character has the same advance
/// unless overridden.
///
/// Every family and size resolves to the same face, so tests do not need to
/// register anything. Glyph lookups are counted.
#[derive(Debug)]
pub struct MockFontMetrics {
    advance: f32,
    glyph_height: f32,
    face: FaceMetrics,
    overrides: HashMap<char, f32>,
    missing: HashSet<char>,
    glyph_lookups: Mutex<usize>,
}

impl MockFontMetrics {
    /// Family name to put in configs; any other name works the same.
    pub const FAMILY: &'static str = "mock";

    /// Every character advances by `advance` and has a glyph that wide.
    pub fn uniform(advance: f32) -> Self {
        Self {
            advance,
            glyph_height: 1.0,
            face: FaceMetrics {
                baseline: 0.8,
                line_height: 1.0,
            },
            overrides: HashMap::new(),
            missing: HashSet::new(),
            glyph_lookups: Mutex::new(0),
        }
    }

    /// Give `ch` its own advance.
    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.overrides.insert(ch, advance);
        self
    }

    /// Make `chars` non-renderable so they take the fallback advance.
    pub fn without_glyphs(mut self, chars: &str) -> Self {
        self.missing.extend(chars.chars());
        self
    }

    pub fn with_glyph_height(mut self, height: f32) -> Self {
        self.glyph_height = height;
        self
    }

    pub fn with_face(mut self, face: FaceMetrics) -> Self {
        self.face = face;
        self
    }

    /// Number of [`FontMetrics::glyph`] calls so far.
    pub fn glyph_lookups(&self) -> usize {
        *self.glyph_lookups.lock()
    }
}

impl FontMetrics for MockFontMetrics {
    fn face(&self, _key: &FontKey) -> Option<FaceMetrics> {
        Some(self.face)
    }

    fn glyph(&self, _key: &FontKey, ch: char) -> Option<GlyphMetrics> {
        *self.glyph_lookups.lock() += 1;
        if self.missing.contains(&ch) {
            return None;
        }
        let advance = self.overrides.get(&ch).copied().unwrap_or(self.advance);
        Some(GlyphMetrics {
            x_offset: 0.0,
            y_offset: 0.0,
            width: advance,
            height: self.glyph_height,
            advance,
        })
    }
}
