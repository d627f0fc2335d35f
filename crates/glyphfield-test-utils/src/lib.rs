//! Test utilities for glyphfield.
//!
//! Mock collaborators for the layout engine:
//!
//! - [`MockFontMetrics`] - uniform advances with per-character overrides and
//!   characters that have no glyph
//! - [`RecordingQuadFactory`] - hands out numbered quads and logs every spawn
//!   and release
//! - [`RecordingContainer`] - a container that logs resize requests and can
//!   be told to ignore them
//!
//! Recorders share their logs through `Arc<parking_lot::Mutex<_>>`, so a test
//! keeps a handle after moving the mock into a `TextField`.
//!
//! # Example
//!
//! ```rust
//! use glyphfield_test_utils::{MockFontMetrics, RecordingContainer, RecordingQuadFactory};
//! use glyphfield_text::{TextFieldConfig, TextLayoutEngine};
//!
//! let fonts = MockFontMetrics::uniform(1.0);
//! let mut factory = RecordingQuadFactory::new();
//! let mut container = RecordingContainer::new(10.0, 10.0);
//! let config = TextFieldConfig::new("abc")
//!     .font(MockFontMetrics::FAMILY)
//!     .nominal_size(1.0)
//!     .rendered_size(1.0);
//!
//! let lines = TextLayoutEngine::new().layout(&config, &mut container, &fonts, &mut factory);
//! assert_eq!(lines[0].glyph_count(), 3);
//! assert_eq!(factory.log().count_spawns(), 3);
//! assert!(container.resizes().is_empty());
//! ```

pub mod mock_container;
pub mod mock_font;
pub mod mock_quad;

pub use mock_container::*;
pub use mock_font::*;
pub use mock_quad::*;
