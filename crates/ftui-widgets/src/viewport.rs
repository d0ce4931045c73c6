//! A scrollable read-only window over a block of text.
//!
//! Designed to be embedded: most of its methods take `&mut self`/`&self`
//! directly rather than going through [`ftui_runtime::Model`], so a
//! surrounding application can drive a viewport as one piece of a larger
//! view. [`crate::pager::Pager`] is the full-screen, standalone use of it.

use ftui_core::{KeyEvent, KeyKind};
use ftui_text::utf8::display_width;

/// Scroll state over a block of lines.
#[derive(Debug, Clone)]
pub struct ViewportModel {
    lines: Vec<String>,
    pub offset: usize,
    height: usize,
    word_wrap: bool,
    wrap_width: usize,
}

impl ViewportModel {
    #[must_use]
    pub fn new(content: &str, height: usize) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
            offset: 0,
            height: height.max(1),
            word_wrap: false,
            wrap_width: 80,
        }
    }

    #[must_use]
    pub const fn word_wrap(mut self, enabled: bool, width: usize) -> Self {
        self.word_wrap = enabled;
        self.wrap_width = width;
        self
    }

    fn rendered_lines(&self) -> Vec<String> {
        if !self.word_wrap {
            return self.lines.clone();
        }
        let mut out = Vec::new();
        for line in &self.lines {
            if display_width(line) <= self.wrap_width {
                out.push(line.clone());
                continue;
            }
            let mut current = String::new();
            for word in line.split(' ') {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if display_width(&candidate) > self.wrap_width && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current = word.to_string();
                } else {
                    current = candidate;
                }
            }
            if !current.is_empty() {
                out.push(current);
            }
        }
        out
    }

    fn max_offset(&self) -> usize {
        self.rendered_lines().len().saturating_sub(self.height)
    }

    /// Visible lines for the current scroll position.
    #[must_use]
    pub fn visible(&self) -> Vec<String> {
        let lines = self.rendered_lines();
        let end = (self.offset + self.height).min(lines.len());
        lines[self.offset.min(lines.len())..end].to_vec()
    }

    pub fn view(&self) -> String {
        self.visible().join("\n")
    }

    #[must_use]
    pub fn at_top(&self) -> bool {
        self.offset == 0
    }

    #[must_use]
    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Fraction scrolled through the content, in `[0.0, 1.0]`. `1.0` when
    /// all content fits in one screen (nothing left to scroll to).
    #[must_use]
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            1.0
        } else {
            self.offset as f64 / max as f64
        }
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Handle a navigation key. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, k: KeyEvent) -> bool {
        match k.key {
            KeyKind::Down => self.scroll_down(1),
            KeyKind::Up => self.scroll_up(1),
            KeyKind::Rune if k.rune == u32::from('j') => self.scroll_down(1),
            KeyKind::Rune if k.rune == u32::from('k') => self.scroll_up(1),
            KeyKind::Rune if k.rune == u32::from('d') => self.scroll_down(self.height / 2),
            KeyKind::Rune if k.rune == u32::from('u') => self.scroll_up(self.height / 2),
            KeyKind::Space | KeyKind::PageDown => self.scroll_down(self.height),
            KeyKind::PageUp => self.scroll_up(self.height),
            KeyKind::Rune if k.rune == u32::from('g') => self.goto_top(),
            KeyKind::Rune if k.rune == u32::from('G') => self.goto_bottom(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewportModel {
        let content = (1..=20)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        ViewportModel::new(&content, 5)
    }

    #[test]
    fn starts_at_top() {
        let vp = sample();
        assert!(vp.at_top());
        assert!(!vp.at_bottom());
    }

    #[test]
    fn scroll_down_moves_offset_and_clamps() {
        let mut vp = sample();
        vp.scroll_down(100);
        assert!(vp.at_bottom());
        assert_eq!(vp.offset, 15);
    }

    #[test]
    fn goto_bottom_then_top_roundtrips() {
        let mut vp = sample();
        vp.goto_bottom();
        assert!(vp.at_bottom());
        vp.goto_top();
        assert!(vp.at_top());
    }

    #[test]
    fn scroll_percent_is_full_when_content_fits() {
        let vp = ViewportModel::new("a\nb", 10);
        assert_eq!(vp.scroll_percent(), 1.0);
    }

    #[test]
    fn half_page_d_u_scroll_by_half_height() {
        let mut vp = sample();
        vp.handle_key(KeyEvent::rune(u32::from('d')));
        assert_eq!(vp.offset, 2);
        vp.handle_key(KeyEvent::rune(u32::from('u')));
        assert_eq!(vp.offset, 0);
    }
}
