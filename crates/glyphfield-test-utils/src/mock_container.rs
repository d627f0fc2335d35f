//! Container that records resize requests.

use std::sync::Arc;

use glyphfield_core::geometry::Size;
use glyphfield_text::Container;
use parking_lot::Mutex;

/// A [`Container`] whose resize requests can be inspected afterwards.
#[derive(Debug, Clone)]
pub struct RecordingContainer {
    size: Size<f32>,
    accept_resizes: bool,
    resizes: Arc<Mutex<Vec<Size<f32>>>>,
}

impl RecordingContainer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            accept_resizes: true,
            resizes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record resize requests without applying them.
    pub fn ignoring_resizes(mut self) -> Self {
        self.accept_resizes = false;
        self
    }

    /// Every size requested so far, oldest first.
    pub fn resizes(&self) -> Vec<Size<f32>> {
        self.resizes.lock().clone()
    }

    pub fn clear_resizes(&self) {
        self.resizes.lock().clear();
    }
}

impl Container for RecordingContainer {
    fn size(&self) -> Size<f32> {
        self.size
    }

    fn resize(&mut self, size: Size<f32>) {
        self.resizes.lock().push(size);
        if self.accept_resizes {
            self.size = size;
        }
    }
}
