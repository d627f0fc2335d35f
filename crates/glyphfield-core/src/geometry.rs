use std::ops::Mul;

/// Width and height of a container or glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<f32> {
    /// Shrink both axes by `amount` on each side.
    pub fn inset(self, amount: f32) -> Self {
        Size {
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}
