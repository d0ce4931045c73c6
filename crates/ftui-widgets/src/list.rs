//! A navigable list prompt.

use ftui_core::{KeyEvent, KeyKind};
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::Style;

/// State for a [`List`] prompt.
#[derive(Debug, Clone)]
pub struct ListModel {
    prompt: String,
    items: Vec<String>,
    pub cursor: usize,
    pub submitted: bool,
    pub cancelled: bool,
}

impl Model for ListModel {
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
        let mut out = String::new();
        if !self.prompt.is_empty() {
            out.push_str(&self.prompt);
            out.push('\n');
        }
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if i == self.cursor {
                out.push_str(&Style::new().reversed().paint(&format!("> {item}")));
            } else {
                out.push_str(&format!("  {item}"));
            }
        }
        out
    }

    fn should_quit(&self) -> bool {
        self.submitted || self.cancelled
    }
}

impl ListModel {
    fn handle_key(&mut self, k: KeyEvent) {
        if k.is_ctrl_c() {
            self.cancelled = true;
            return;
        }
        match k.key {
            KeyKind::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyKind::Down => self.cursor = (self.cursor + 1).min(self.last_index()),
            KeyKind::Rune if k.rune == u32::from('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyKind::Rune if k.rune == u32::from('j') => {
                self.cursor = (self.cursor + 1).min(self.last_index());
            }
            KeyKind::Home => self.cursor = 0,
            KeyKind::End => self.cursor = self.last_index(),
            KeyKind::Enter => self.submitted = true,
            KeyKind::Escape => self.cancelled = true,
            _ => {}
        }
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}

/// Builder for a [`ListModel`] prompt.
#[derive(Debug, Clone, Default)]
pub struct List {
    prompt: String,
    items: Vec<String>,
}

impl List {
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self {
            prompt: String::new(),
            items,
        }
    }

    #[must_use]
    pub fn prompt(mut self, p: impl Into<String>) -> Self {
        self.prompt = p.into();
        self
    }

    /// Runs the prompt. Returns `None` if there are no items, the prompt
    /// was cancelled, or raw mode can't be acquired; otherwise the
    /// selected item's index.
    #[must_use]
    pub fn run(self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let model = ListModel {
            prompt: self.prompt,
            items: self.items,
            cursor: 0,
            submitted: false,
            cancelled: false,
        };
        match Program::new(model, ProgramConfig::new()).run() {
            Ok(m) if m.submitted => Some(m.cursor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ListModel {
        ListModel {
            prompt: String::new(),
            items: vec!["a".into(), "b".into(), "c".into()],
            cursor: 0,
            submitted: false,
            cancelled: false,
        }
    }

    #[test]
    fn down_advances_and_clamps_at_end() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        assert_eq!(model.cursor, 2);
    }

    #[test]
    fn up_clamps_at_zero() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Up)));
        assert_eq!(model.cursor, 0);
    }

    #[test]
    fn jk_navigate_like_arrows() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('j'))));
        assert_eq!(model.cursor, 1);
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('k'))));
        assert_eq!(model.cursor, 0);
    }

    #[test]
    fn enter_submits_current_cursor() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Enter)));
        assert!(model.submitted);
        assert_eq!(model.cursor, 1);
    }

    #[test]
    fn empty_items_never_run() {
        assert_eq!(List::new(Vec::new()).run(), None);
    }
}
