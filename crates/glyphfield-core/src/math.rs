//! Vector math re-exported from [`glam`].
//!
//! Quad positions and sizes are [`Vec2`] in container pixels. glam's `mint`
//! feature is enabled, so callers on other math crates can convert with
//! `.into()`.
//!
//! ```
//! use glyphfield_core::math::Vec2;
//!
//! let mut position = Vec2::new(10.0, 20.0);
//! position.y -= 5.0;
//! assert_eq!(position, Vec2::new(10.0, 15.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;

