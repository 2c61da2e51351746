//! Visual variants for the UI primitives.
//!
//! Each variant maps to a CSS-module class in the component that renders it.

/// Typography variants for [`Text`](crate::components::Text).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextVariant {
    /// Body copy (default)
    #[default]
    BodyMd,
    LabelMedium,
    LabelSmall,
    HeadingMedium,
    HeadingSmall,
}

impl TextVariant {
    /// Whether this variant renders as a heading element.
    pub fn is_heading(self) -> bool {
        matches!(self, Self::HeadingMedium | Self::HeadingSmall)
    }
}

/// Size variants for the file input drop-zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    #[default]
    Md,
}

/// Size variants for icons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    Sm,
    #[default]
    Md,
}

impl From<InputSize> for IconSize {
    fn from(size: InputSize) -> Self {
        match size {
            InputSize::Md => IconSize::Md,
        }
    }
}
