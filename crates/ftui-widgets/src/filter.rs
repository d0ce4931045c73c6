//! A fuzzy-filtering list prompt.

use ftui_core::{KeyEvent, KeyKind};
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::Style;
use ftui_text::utf8::{erase, insert, length};
use ftui_text::{fuzzy_match, MatchResult};

/// State for a [`Filter`] prompt.
#[derive(Debug, Clone)]
pub struct FilterModel {
    prompt: String,
    items: Vec<String>,
    height: usize,
    pub query: String,
    /// Indices into `items`, ordered by descending fuzzy score.
    pub matches: Vec<usize>,
    pub cursor: usize,
    pub submitted: bool,
    pub cancelled: bool,
}

impl Model for FilterModel {
    type UserMsg = ();

    fn update(mut self, msg: Msg<()>) -> (Self, Cmd<()>) {
        if self.submitted || self.cancelled {
            return (self, Cmd::none());
        }
        if let Msg::Key(k) = msg {
            self.handle_key(k);
        } else if matches!(msg, Msg::Quit) {
            self.cancelled = true;
        }
        (self, Cmd::none())
    }

    fn view(&self) -> String {
        let mut out = format!("{}{}", self.prompt, self.query);
        for (row, &idx) in self.matches.iter().take(self.height).enumerate() {
            out.push('\n');
            let item = &self.items[idx];
            let line = self.highlight(item);
            if row == self.cursor {
                out.push_str(&Style::new().reversed().paint(&format!("> {line}")));
            } else {
                out.push_str(&format!("  {line}"));
            }
        }
        out
    }

    fn should_quit(&self) -> bool {
        self.submitted || self.cancelled
    }
}

impl FilterModel {
    fn highlight(&self, item: &str) -> String {
        let MatchResult { positions, .. } = fuzzy_match(&self.query, item, false);
        let mut out = String::new();
        for (i, c) in item.chars().enumerate() {
            if positions.contains(&i) {
                out.push_str(&Style::new().bold().paint(&c.to_string()));
            } else {
                out.push(c);
            }
        }
        out
    }

    fn refilter(&mut self) {
        self.matches = ftui_text::filter(&self.items, &self.query);
        self.cursor = self.cursor.min(self.matches.len().saturating_sub(1));
    }

    fn handle_key(&mut self, k: KeyEvent) {
        if k.is_ctrl_c() {
            self.cancelled = true;
            return;
        }
        match k.key {
            KeyKind::Rune | KeyKind::Space => {
                let c = char::from_u32(k.rune).unwrap_or('\u{FFFD}');
                let mut buf = [0u8; 4];
                let s = c.encode_utf8(&mut buf);
                self.query = insert(&self.query, length(&self.query), s);
                self.refilter();
            }
            KeyKind::Backspace => {
                let len = length(&self.query);
                if len > 0 {
                    self.query = erase(&self.query, len - 1, 1);
                    self.refilter();
                }
            }
            KeyKind::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyKind::Down => {
                self.cursor = (self.cursor + 1).min(self.matches.len().saturating_sub(1));
            }
            KeyKind::Enter => {
                if !self.matches.is_empty() {
                    self.submitted = true;
                }
            }
            KeyKind::Escape => self.cancelled = true,
            _ => {}
        }
    }
}

/// Builder for a [`FilterModel`] prompt.
#[derive(Debug, Clone)]
pub struct Filter {
    prompt: String,
    items: Vec<String>,
    height: usize,
}

impl Filter {
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self {
            prompt: "> ".to_string(),
            items,
            height: 10,
        }
    }

    #[must_use]
    pub fn prompt(mut self, p: impl Into<String>) -> Self {
        self.prompt = p.into();
        self
    }

    #[must_use]
    pub fn height(mut self, rows: usize) -> Self {
        self.height = rows.max(1);
        self
    }

    /// Returns the index into the original item list, or `None` on
    /// cancellation or if the item list is empty.
    #[must_use]
    pub fn run(self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let matches: Vec<usize> = (0..self.items.len()).collect();
        let model = FilterModel {
            prompt: self.prompt,
            items: self.items,
            height: self.height,
            query: String::new(),
            matches,
            cursor: 0,
            submitted: false,
            cancelled: false,
        };
        match Program::new(model, ProgramConfig::new()).run() {
            Ok(m) if m.submitted => m.matches.get(m.cursor).copied(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> FilterModel {
        let items = vec!["apple".to_string(), "banana".to_string(), "grape".to_string()];
        FilterModel {
            prompt: "> ".into(),
            matches: (0..items.len()).collect(),
            items,
            height: 10,
            query: String::new(),
            cursor: 0,
            submitted: false,
            cancelled: false,
        }
    }

    #[test]
    fn typing_narrows_matches() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('g'))));
        assert_eq!(model.matches, vec![2]);
    }

    #[test]
    fn backspace_widens_matches_again() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('g'))));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Backspace)));
        assert_eq!(model.matches.len(), 3);
    }

    #[test]
    fn enter_with_no_matches_does_not_submit() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('z'))));
        assert!(model.matches.is_empty());
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Enter)));
        assert!(!model.submitted);
    }

    #[test]
    fn cursor_clamps_when_matches_shrink() {
        let mut model = fresh();
        model.cursor = 2;
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('g'))));
        assert_eq!(model.cursor, 0);
    }
}
