/// Errors from validating a text field configuration.
///
/// Layout itself never fails; these only come out of
/// [`TextFieldConfig::validate`](crate::TextFieldConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum TextError {
    /// Nominal or rendered font size is zero, negative or not finite.
    InvalidFontSize { name: &'static str, value: f32 },

    /// A width or height range with `min > max` or a non-finite bound.
    InvalidRange {
        axis: &'static str,
        min: f32,
        max: f32,
    },

    /// Padding is negative or not finite.
    InvalidPadding(f32),

    /// Line spacing is zero, negative or not finite.
    InvalidLineSpacing(f32),
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::InvalidFontSize { name, value } => {
                write!(f, "Invalid {} font size: {}", name, value)
            }
            TextError::InvalidRange { axis, min, max } => {
                write!(f, "Invalid {} range: [{}, {}]", axis, min, max)
            }
            TextError::InvalidPadding(value) => write!(f, "Invalid padding: {}", value),
            TextError::InvalidLineSpacing(value) => {
                write!(f, "Invalid line spacing: {}", value)
            }
        }
    }
}

impl std::error::Error for TextError {}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
