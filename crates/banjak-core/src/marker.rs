//! Marker styles the canvas can rasterize into.

use ratatui::symbols::Marker;

/// Which glyph family the canvas paints with.
///
/// Braille gives the finest grid (2x4 dots per cell); the other styles trade
/// resolution for wider font support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    #[default]
    Braille,
    HalfBlock,
    Block,
    Dot,
}

impl MarkerStyle {
    /// Cycle to the next style, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Braille => Self::HalfBlock,
            Self::HalfBlock => Self::Block,
            Self::Block => Self::Dot,
            Self::Dot => Self::Braille,
        }
    }

    pub const fn marker(self) -> Marker {
        match self {
            Self::Braille => Marker::Braille,
            Self::HalfBlock => Marker::HalfBlock,
            Self::Block => Marker::Block,
            Self::Dot => Marker::Dot,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Braille => "braille",
            Self::HalfBlock => "half-block",
            Self::Block => "block",
            Self::Dot => "dot",
        }
    }

    /// Parse a configuration name as produced by [`MarkerStyle::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "braille" => Some(Self::Braille),
            "half-block" => Some(Self::HalfBlock),
            "block" => Some(Self::Block),
            "dot" => Some(Self::Dot),
            _ => None,
        }
    }
}
