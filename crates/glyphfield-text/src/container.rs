use glyphfield_core::geometry::Size;

/// The rectangle a text field lays out into.
///
/// Layout reads the size and, when the field has width or height ranges,
/// asks for at most one resize per pass. The request is fire-and-forget:
/// layout continues with whatever [`Container::size`] reports afterwards.
pub trait Container {
    fn size(&self) -> Size<f32>;
    fn resize(&mut self, size: Size<f32>);
}

impl<C: Container + ?Sized> Container for &mut C {
    fn size(&self) -> Size<f32> {
        (**self).size()
    }

    fn resize(&mut self, size: Size<f32>) {
        (**self).resize(size)
    }
}

/// A container that accepts every resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UiRect {
    pub size: Size<f32>,
}

impl UiRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl Container for UiRect {
    fn size(&self) -> Size<f32> {
        self.size
    }

    fn resize(&mut self, size: Size<f32>) {
        self.size = size;
    }
}
