//! Drawable glyph quads.
//!
//! Layout does not own a renderer. It asks a [`QuadFactory`] for handles and
//! writes their geometry; the caller decides what a handle draws into. Handles
//! belong to the layout pass that spawned them and go back to the factory
//! before the next pass starts.

use glyphfield_core::color::Color;
use glyphfield_core::math::Vec2;

use crate::font::GlyphMetrics;

/// A positioned glyph handle.
///
/// Positions are in container pixels with the origin at the container's
/// bottom-left corner and y growing upward.
pub trait GlyphQuad {
    fn set_sprite(&mut self, sprite: GlyphMetrics);
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn set_size(&mut self, size: Vec2);
    fn set_visible(&mut self, visible: bool);
    fn set_color(&mut self, color: Color);

    /// Move the quad by `delta`.
    fn translate(&mut self, delta: Vec2) {
        let position = self.position();
        self.set_position(position + delta);
    }
}

/// Creates and reclaims quads.
pub trait QuadFactory {
    type Quad: GlyphQuad;

    fn spawn_quad(&mut self) -> Self::Quad;

    /// Take back a quad from a previous layout pass.
    fn release_quad(&mut self, quad: Self::Quad);
}

/// Plain-data quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub position: Vec2,
    pub size: Vec2,
    pub sprite: Option<GlyphMetrics>,
    pub visible: bool,
    pub color: Color,
}

impl Default for Quad {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            sprite: None,
            visible: true,
            color: Color::WHITE,
        }
    }
}

impl Quad {
    /// Clear sprite, geometry and style back to the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl GlyphQuad for Quad {
    fn set_sprite(&mut self, sprite: GlyphMetrics) {
        self.sprite = Some(sprite);
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Recycling [`QuadFactory`] for [`Quad`].
///
/// Released quads are reset to [`Quad::default`] and kept on a free list.
/// Spawns take from that list before building a new quad.
#[derive(Debug, Default)]
pub struct QuadPool {
    free: Vec<Quad>,
    live: usize,
}

impl QuadPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quads currently handed out.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Quads waiting for reuse.
    pub fn pooled(&self) -> usize {
        self.free.len()
    }
}

impl QuadFactory for QuadPool {
    type Quad = Quad;

    fn spawn_quad(&mut self) -> Quad {
        self.live += 1;
        self.free.pop().unwrap_or_default()
    }

    fn release_quad(&mut self, mut quad: Quad) {
        self.live = self.live.saturating_sub(1);
        quad.reset();
        self.free.push(quad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_translate() {
        let mut quad = Quad::default();
        quad.set_position(Vec2::new(1.0, 2.0));
        quad.translate(Vec2::new(3.0, -1.0));
        assert_eq!(quad.position(), Vec2::new(4.0, 1.0));
    }

    #[test]
    fn test_pool_recycles() {
        let mut pool = QuadPool::new();
        let mut a = pool.spawn_quad();
        a.set_visible(false);
        let b = pool.spawn_quad();
        assert_eq!(pool.live(), 2);

        pool.release_quad(a);
        pool.release_quad(b);
        assert_eq!(pool.live(), 0);
        assert_eq!(pool.pooled(), 2);

        let c = pool.spawn_quad();
        assert_eq!(c, Quad::default());
        assert_eq!(pool.pooled(), 1);
    }

    #[test]
    fn test_released_quad_is_reset() {
        let mut pool = QuadPool::new();
        let mut quad = pool.spawn_quad();
        quad.set_position(Vec2::new(5.0, 6.0));
        quad.set_size(Vec2::new(2.0, 3.0));
        quad.set_color(Color::BLACK);
        quad.set_sprite(GlyphMetrics {
            x_offset: 0.0,
            y_offset: 0.0,
            width: 2.0,
            height: 3.0,
            advance: 2.0,
        });
        pool.release_quad(quad);

        let reused = pool.spawn_quad();
        assert_eq!(reused, Quad::default());
        assert_eq!(pool.pooled(), 0);
        assert_eq!(pool.live(), 1);
    }
}
