//! Quad factory that records every spawn and release.

use std::sync::Arc;

use glyphfield_core::color::Color;
use glyphfield_core::math::Vec2;
use glyphfield_text::{GlyphMetrics, GlyphQuad, QuadFactory};
use parking_lot::Mutex;

/// A recorded factory call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadCall {
    Spawn { id: usize },
    Release { id: usize },
}

/// A quad tagged with the id it was spawned under.
#[derive(Debug, Clone, PartialEq)]
pub struct MockQuad {
    pub id: usize,
    pub position: Vec2,
    pub size: Vec2,
    pub sprite: Option<GlyphMetrics>,
    pub visible: bool,
    pub color: Color,
}

impl GlyphQuad for MockQuad {
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

/// Shared view of a [`RecordingQuadFactory`]'s call log.
#[derive(Debug, Clone, Default)]
pub struct QuadLog {
    calls: Arc<Mutex<Vec<QuadCall>>>,
}

impl QuadLog {
    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<QuadCall> {
        self.calls.lock().clone()
    }

    pub fn count_spawns(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, QuadCall::Spawn { .. }))
            .count()
    }

    pub fn count_releases(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, QuadCall::Release { .. }))
            .count()
    }

    /// Ids spawned and not yet released, in spawn order.
    pub fn live_ids(&self) -> Vec<usize> {
        let calls = self.calls.lock();
        let released: Vec<usize> = calls
            .iter()
            .filter_map(|call| match call {
                QuadCall::Release { id } => Some(*id),
                QuadCall::Spawn { .. } => None,
            })
            .collect();
        calls
            .iter()
            .filter_map(|call| match call {
                QuadCall::Spawn { id } if !released.contains(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn push(&self, call: QuadCall) {
        self.calls.lock().push(call);
    }
}

/// A [`QuadFactory`] that never reuses ids.
#[derive(Debug, Default)]
pub struct RecordingQuadFactory {
    log: QuadLog,
    next_id: usize,
}

impl RecordingQuadFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the call log; stays valid after the factory is moved.
    pub fn log(&self) -> QuadLog {
        self.log.clone()
    }
}

impl QuadFactory for RecordingQuadFactory {
    type Quad = MockQuad;

    fn spawn_quad(&mut self) -> MockQuad {
        let id = self.next_id;
        self.next_id += 1;
        self.log.push(QuadCall::Spawn { id });
        MockQuad {
            id,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            sprite: None,
            visible: true,
            color: Color::WHITE,
        }
    }

    fn release_quad(&mut self, quad: MockQuad) {
        self.log.push(QuadCall::Release { id: quad.id });
    }
}
