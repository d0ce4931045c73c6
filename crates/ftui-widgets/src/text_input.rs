//! A single-line text input.

use ftui_core::{KeyEvent, KeyKind};
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::Style;
use ftui_text::{display_width, erase, insert, length, substring};

/// State for a [`TextInput`].
#[derive(Debug, Clone)]
pub struct TextInputModel {
    prompt: String,
    placeholder: String,
    password: bool,
    char_limit: Option<usize>,
    pub value: String,
    pub cursor: usize,
    pub submitted: bool,
    pub cancelled: bool,
}

impl Model for TextInputModel {
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
        if self.value.is_empty() {
            let cursor = Style::new().reversed().paint(" ");
            let placeholder = Style::new().dim().paint(&self.placeholder);
            return format!("{}{cursor}{placeholder}", self.prompt);
        }
        let shown = if self.password {
            "•".repeat(length(&self.value))
        } else {
            self.value.clone()
        };
        let cursor_in_shown = self.cursor.min(length(&shown));
        let before = substring(&shown, 0, cursor_in_shown);
        let at_cursor = substring(&shown, cursor_in_shown, 1);
        let after = substring(&shown, cursor_in_shown + 1, length(&shown));
        if at_cursor.is_empty() {
            format!(
                "{}{before}{}",
                self.prompt,
                Style::new().reversed().paint(" ")
            )
        } else {
            format!(
                "{}{before}{}{after}",
                self.prompt,
                Style::new().reversed().paint(&at_cursor)
            )
        }
    }

    fn should_quit(&self) -> bool {
        self.submitted || self.cancelled
    }
}

impl TextInputModel {
    fn handle_key(&mut self, k: KeyEvent) {
        if k.is_ctrl_c() {
            self.cancelled = true;
            return;
        }
        match k.key {
            KeyKind::Rune | KeyKind::Space => self.try_insert(char_from(k)),
            KeyKind::Backspace => {
                if self.cursor > 0 {
                    self.value = erase(&self.value, self.cursor - 1, 1);
                    self.cursor -= 1;
                }
            }
            KeyKind::Delete => {
                self.value = erase(&self.value, self.cursor, 1);
            }
            KeyKind::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyKind::Right => self.cursor = (self.cursor + 1).min(length(&self.value)),
            KeyKind::Home => self.cursor = 0,
            KeyKind::End => self.cursor = length(&self.value),
            KeyKind::Enter => self.submitted = true,
            KeyKind::Escape => self.cancelled = true,
            _ => {}
        }
    }

    fn try_insert(&mut self, c: char) {
        if let Some(limit) = self.char_limit {
            if display_width(&self.value) + ftui_text::utf8::char_width(c) > limit {
                return;
            }
        }
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.value = insert(&self.value, self.cursor, s);
        self.cursor += 1;
    }
}

fn char_from(k: KeyEvent) -> char {
    char::from_u32(k.rune).unwrap_or('\u{FFFD}')
}

/// Builder for a [`TextInputModel`].
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    prompt: String,
    placeholder: String,
    initial_value: String,
    password: bool,
    char_limit: Option<usize>,
}

impl TextInput {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn placeholder(mut self, s: impl Into<String>) -> Self {
        self.placeholder = s.into();
        self
    }

    #[must_use]
    pub fn value(mut self, s: impl Into<String>) -> Self {
        self.initial_value = s.into();
        self
    }

    #[must_use]
    pub const fn password(mut self, enabled: bool) -> Self {
        self.password = enabled;
        self
    }

    /// Clamped to at least 1 when set — a zero limit would make the
    /// field permanently unusable, which "clamp to a safe default"
    /// rules out.
    #[must_use]
    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit.max(1));
        self
    }

    #[must_use]
    pub fn run(self) -> Option<String> {
        let cursor = length(&self.initial_value);
        let model = TextInputModel {
            prompt: self.prompt,
            placeholder: self.placeholder,
            password: self.password,
            char_limit: self.char_limit,
            value: self.initial_value,
            cursor,
            submitted: false,
            cancelled: false,
        };
        match Program::new(model, ProgramConfig::new()).run() {
            Ok(m) if m.submitted => Some(m.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> TextInputModel {
        TextInputModel {
            prompt: "> ".into(),
            placeholder: String::new(),
            password: false,
            char_limit: None,
            value: String::new(),
            cursor: 0,
            submitted: false,
            cancelled: false,
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('a'))));
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('b'))));
        assert_eq!(model.value, "ab");
        assert_eq!(model.cursor, 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('a'))));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Backspace)));
        assert_eq!(model.value, "");
        assert_eq!(model.cursor, 0);
    }

    #[test]
    fn char_limit_silently_ignores_excess_keystrokes() {
        let mut model = fresh();
        model.char_limit = Some(1);
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('a'))));
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('b'))));
        assert_eq!(model.value, "a");
    }

    #[test]
    fn home_end_move_cursor_to_bounds() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('a'))));
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('b'))));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Home)));
        assert_eq!(model.cursor, 0);
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::End)));
        assert_eq!(model.cursor, 2);
    }

    #[test]
    fn enter_submits_escape_cancels() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Enter)));
        assert!(model.submitted);

        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Escape)));
        assert!(model.cancelled);
    }
}
