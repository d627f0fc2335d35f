//! Glyphfield Text - line wrapping and glyph layout for text fields
//!
//! This crate turns a string into positioned glyph quads:
//! - [`LineWrapper`] splits text into lines using per-character advances and
//!   three character classes (line breaks, printed and strippable delimiters)
//! - [`TextLayoutEngine`] fits the container, places one quad per renderable
//!   glyph and applies one of nine [`TextAnchor`] alignments
//! - [`TextField`] owns a configuration and relays it out on every change
//!
//! Fonts, quads and containers are traits ([`FontMetrics`], [`QuadFactory`],
//! [`Container`]) so the crate has no renderer dependency. [`FontAtlas`],
//! [`QuadPool`] and [`UiRect`] are ready-made implementations.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use glyphfield_text::{
//!     FaceMetrics, FontAtlas, FontKey, GlyphMetrics, QuadPool, TextAnchor, TextField,
//!     TextFieldConfig, UiRect,
//! };
//!
//! let key = FontKey::new("mono", 16.0);
//! let mut atlas = FontAtlas::new();
//! atlas.insert_face(key.clone(), FaceMetrics { baseline: 13.0, line_height: 16.0 });
//! for ch in 'a'..='z' {
//!     atlas.insert_glyph(&key, ch, GlyphMetrics {
//!         x_offset: 0.0,
//!         y_offset: 4.0,
//!         width: 8.0,
//!         height: 9.0,
//!         advance: 8.0,
//!     });
//! }
//!
//! let config = TextFieldConfig::new("hello world")
//!     .font("mono")
//!     .nominal_size(16.0)
//!     .rendered_size(16.0)
//!     .alignment(TextAnchor::MiddleCenter);
//!
//! let field = TextField::from_config(config, UiRect::new(64.0, 64.0), Arc::new(atlas), QuadPool::new())
//!     .expect("valid config");
//! assert_eq!(field.line_count(), 2);
//! ```

pub mod align;
pub mod classify;
pub mod config;
pub mod container;
pub mod error;
pub mod field;
pub mod font;
pub mod layout;
pub mod quad;
pub mod wrap;

pub use align::{Horizontal, TextAnchor, Vertical};
pub use classify::{CharClass, CharClasses};
pub use config::{SizeRange, TextFieldConfig};
pub use container::{Container, UiRect};
pub use error::{TextError, TextResult};
pub use field::TextField;
pub use font::{FaceMetrics, FontAtlas, FontKey, FontMetrics, GlyphMetrics, fallback_advance};
pub use layout::{TextLayoutEngine, TextLine};
pub use quad::{GlyphQuad, Quad, QuadFactory, QuadPool};
pub use wrap::{LineWrapper, WrappedLine, WrappedText, wrap_text};

// Re-export shared types from glyphfield-core
pub use glyphfield_core::color::Color;
pub use glyphfield_core::geometry::Size;
pub use glyphfield_core::math::Vec2;
