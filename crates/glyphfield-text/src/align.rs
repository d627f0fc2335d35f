/// Where text sits inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAnchor {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// Vertical component of a [`TextAnchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Upper,
    Middle,
    Lower,
}

/// Horizontal component of a [`TextAnchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

// Indexed by `TextAnchor as usize`.
const ANCHOR_AXES: [(Vertical, Horizontal); 9] = [
    (Vertical::Upper, Horizontal::Left),
    (Vertical::Upper, Horizontal::Center),
    (Vertical::Upper, Horizontal::Right),
    (Vertical::Middle, Horizontal::Left),
    (Vertical::Middle, Horizontal::Center),
    (Vertical::Middle, Horizontal::Right),
    (Vertical::Lower, Horizontal::Left),
    (Vertical::Lower, Horizontal::Center),
    (Vertical::Lower, Horizontal::Right),
];

impl TextAnchor {
    pub const ALL: [TextAnchor; 9] = [
        TextAnchor::UpperLeft,
        TextAnchor::UpperCenter,
        TextAnchor::UpperRight,
        TextAnchor::MiddleLeft,
        TextAnchor::MiddleCenter,
        TextAnchor::MiddleRight,
        TextAnchor::LowerLeft,
        TextAnchor::LowerCenter,
        TextAnchor::LowerRight,
    ];

    pub fn axes(self) -> (Vertical, Horizontal) {
        ANCHOR_AXES[self as usize]
    }

    pub fn vertical(self) -> Vertical {
        self.axes().0
    }

    pub fn horizontal(self) -> Horizontal {
        self.axes().1
    }

    pub fn from_axes(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self::ALL[vertical as usize * 3 + horizontal as usize]
    }
}
