//! Color types.
//!
//! Grounded in the teacher's `ftui-style::color` module (`Rgb`, the 16-color
//! ANSI table), reduced to what a string-producing facade needs: no color
//! profile downgrade engine, no `PackedRgba` interop — this crate doesn't
//! sit on top of a cell buffer.

/// A color, either a named ANSI index, an extended 256-color index, or
/// 24-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 standard ANSI colors (0-15).
    Named(u8),
    /// An extended 256-color palette index.
    Indexed(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Named(0);
    pub const RED: Self = Self::Named(1);
    pub const GREEN: Self = Self::Named(2);
    pub const YELLOW: Self = Self::Named(3);
    pub const BLUE: Self = Self::Named(4);
    pub const MAGENTA: Self = Self::Named(5);
    pub const CYAN: Self = Self::Named(6);
    pub const WHITE: Self = Self::Named(7);

    /// The SGR parameter sequence (without the leading/trailing escape)
    /// selecting this color as a foreground or background.
    fn sgr_params(self, foreground: bool) -> String {
        match self {
            Self::Named(n) if n < 8 => {
                let base = if foreground { 30 } else { 40 };
                format!("{}", base + n)
            }
            Self::Named(n) => {
                let base = if foreground { 90 } else { 100 };
                format!("{}", base + (n - 8))
            }
            Self::Indexed(n) => {
                let kind = if foreground { 38 } else { 48 };
                format!("{kind};5;{n}")
            }
            Self::Rgb(r, g, b) => {
                let kind = if foreground { 38 } else { 48 };
                format!("{kind};2;{r};{g};{b}")
            }
        }
    }
}

pub(crate) fn fg_params(c: Color) -> String {
    c.sgr_params(true)
}

pub(crate) fn bg_params(c: Color) -> String {
    c.sgr_params(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_foreground_uses_30_range() {
        assert_eq!(fg_params(Color::RED), "31");
    }

    #[test]
    fn bright_named_uses_90_range() {
        assert_eq!(fg_params(Color::Named(9)), "91");
    }

    #[test]
    fn rgb_uses_38_2_params() {
        assert_eq!(fg_params(Color::Rgb(10, 20, 30)), "38;2;10;20;30");
    }
}
