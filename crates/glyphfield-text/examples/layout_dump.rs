//! Layout Dump Example
//!
//! Lays out a text field against a fixed-advance font and prints every line
//! with its glyph positions:
//! - Registering a face and glyphs in a `FontAtlas`
//! - Building a `TextFieldConfig` with a width range and alignment
//! - Inspecting the lines and quads a `TextField` produced
//!
//! ## Usage
//! ```bash
//! cargo run -p glyphfield-text --example layout_dump -- "Some text to wrap" 120
//! RUST_LOG=glyphfield_text=trace cargo run -p glyphfield-text --example layout_dump
//! GLYPHFIELD_PUFFIN=127.0.0.1:8585 cargo run -p glyphfield-text --example layout_dump
//! ```

use std::sync::Arc;

use glyphfield_core::logging;
use glyphfield_text::{
    FaceMetrics, FontAtlas, FontKey, GlyphMetrics, GlyphQuad, QuadPool, SizeRange, TextAnchor,
    TextField, TextFieldConfig, UiRect,
};

const FAMILY: &str = "fixed";
const NOMINAL: f32 = 32.0;

fn fixed_atlas() -> FontAtlas {
    let key = FontKey::new(FAMILY, NOMINAL);
    let mut atlas = FontAtlas::new();
    atlas.insert_face(
        key.clone(),
        FaceMetrics {
            baseline: 26.0,
            line_height: NOMINAL,
        },
    );
    for ch in '!'..='~' {
        atlas.insert_glyph(
            &key,
            ch,
            GlyphMetrics {
                x_offset: 1.0,
                y_offset: 6.0,
                width: 14.0,
                height: 20.0,
                advance: 16.0,
            },
        );
    }
    atlas
}

fn main() {
    logging::init();

    #[cfg(feature = "profiling")]
    if let Ok(addr) = std::env::var("GLYPHFIELD_PUFFIN") {
        glyphfield_core::profiling::init_profiling(&addr);
    }

    let mut args = std::env::args().skip(1);
    let text = args
        .next()
        .unwrap_or_else(|| "The quick brown fox jumps over the lazy dog.\nSecond paragraph.".into());
    let max_width = args.next().and_then(|w| w.parse().ok()).unwrap_or(160.0);

    let config = TextFieldConfig::new(text)
        .font(FAMILY)
        .nominal_size(NOMINAL)
        .rendered_size(16.0)
        .padding(2.0)
        .width_range(SizeRange::new(0.0, max_width))
        .height_range(SizeRange::new(0.0, 400.0))
        .alignment(TextAnchor::UpperCenter);

    let field = match TextField::from_config(
        config,
        UiRect::new(max_width, 400.0),
        Arc::new(fixed_atlas()),
        QuadPool::new(),
    ) {
        Ok(field) => field,
        Err(e) => {
            tracing::error!("invalid text field config: {}", e);
            return;
        }
    };

    #[cfg(feature = "profiling")]
    glyphfield_core::profiling::new_frame();

    let size = field.container().size;
    println!("container: {} x {}", size.width, size.height);
    for line in field.lines() {
        println!("line {} ({} units): {:?}", line.index, line.width, line.text());
        for (ch, quad) in line.chars.iter().zip(&line.quads) {
            match quad {
                Some(quad) => {
                    let p = quad.position();
                    println!("  {ch:?} at ({:.1}, {:.1})", p.x, p.y);
                }
                None => println!("  {ch:?} (no glyph)"),
            }
        }
    }
}
