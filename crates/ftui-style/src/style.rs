//! `Style`: a small SGR-producing helper.
//!
//! This crate is the "external collaborator" the spec names: a
//! string-producing facade, not a terminal-capability negotiation engine.
//! Widget views call [`Style::paint`] and get back a string wrapped in
//! the right escape codes plus a trailing reset — no color-profile
//! downgrade, no theme system.

use crate::color::{bg_params, fg_params, Color};

/// A combination of foreground/background color and text attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reversed: bool,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            reversed: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, c: Color) -> Self {
        self.fg = Some(c);
        self
    }

    #[must_use]
    pub const fn bg(mut self, c: Color) -> Self {
        self.bg = Some(c);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub const fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    fn sgr_codes(self) -> Vec<String> {
        let mut codes = Vec::new();
        if self.bold {
            codes.push("1".to_string());
        }
        if self.dim {
            codes.push("2".to_string());
        }
        if self.italic {
            codes.push("3".to_string());
        }
        if self.underline {
            codes.push("4".to_string());
        }
        if self.reversed {
            codes.push("7".to_string());
        }
        if let Some(fg) = self.fg {
            codes.push(fg_params(fg));
        }
        if let Some(bg) = self.bg {
            codes.push(bg_params(bg));
        }
        codes
    }

    /// True if this style has no attributes or colors set (so `paint`
    /// would be a no-op).
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && !self.bold
            && !self.dim
            && !self.italic
            && !self.underline
            && !self.reversed
    }

    /// Wrap `text` in this style's SGR sequence and a trailing reset.
    /// Plain styles return `text` unmodified.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        let codes = self.sgr_codes().join(";");
        format!("\x1b[{codes}m{text}\x1b[0m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_is_a_no_op() {
        assert_eq!(Style::new().paint("hi"), "hi");
    }

    #[test]
    fn bold_wraps_with_reset() {
        assert_eq!(Style::new().bold().paint("hi"), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn combined_attributes_join_with_semicolons() {
        let s = Style::new().bold().fg(Color::RED);
        assert_eq!(s.paint("x"), "\x1b[1;31mx\x1b[0m");
    }
}
