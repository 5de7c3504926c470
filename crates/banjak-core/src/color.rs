//! Packed 24-bit RGB colors.

use ratatui::style::Color;

/// A color packed as `0xRRGGBB`, the form the scene stores and tests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Self = Self(0x000000);

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Parse a `#rrggbb` hex string; the leading `#` is optional.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    /// Mix this color over `background` with weight `alpha` in `[0, 1]`.
    ///
    /// Terminal cells have no alpha channel, so translucency is approximated
    /// by shifting the foreground toward the background color.
    pub fn blend(self, background: Self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let channel = |fg: u8, bg: u8| -> u32 {
            (f64::from(bg) + (f64::from(fg) - f64::from(bg)) * alpha).round() as u32
        };
        Self(
            channel(self.r(), background.r()) << 16
                | channel(self.g(), background.g()) << 8
                | channel(self.b(), background.b()),
        )
    }

    pub const fn to_color(self) -> Color {
        Color::Rgb(self.r(), self.g(), self.b())
    }
}
