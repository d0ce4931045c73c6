//! A multi-line text editor.

use ftui_core::{KeyEvent, KeyKind};
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::Style;
use ftui_text::utf8::{display_width, erase, insert, length, substring};

/// State for a [`TextArea`].
#[derive(Debug, Clone)]
pub struct TextAreaModel {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    line_numbers: bool,
    wrap_width: Option<usize>,
    pub submitted: bool,
    pub cancelled: bool,
}

impl Model for TextAreaModel {
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
        self.lines
            .iter()
            .enumerate()
            .map(|(row, line)| self.render_line(row, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn should_quit(&self) -> bool {
        self.submitted || self.cancelled
    }
}

impl TextAreaModel {
    fn render_line(&self, row: usize, line: &str) -> String {
        let prefix = if self.line_numbers {
            format!("{:>4} ", row + 1)
        } else {
            String::new()
        };
        let wrapped = match self.wrap_width {
            Some(w) if display_width(line) > w => substring(line, 0, w),
            _ => line.to_string(),
        };
        if row != self.cursor_row {
            return format!("{prefix}{wrapped}");
        }
        let col = self.cursor_col.min(length(&wrapped));
        let before = substring(&wrapped, 0, col);
        let at = substring(&wrapped, col, 1);
        let after = substring(&wrapped, col + 1, length(&wrapped));
        if at.is_empty() {
            format!("{prefix}{before}{}", Style::new().reversed().paint(" "))
        } else {
            format!(
                "{prefix}{before}{}{after}",
                Style::new().reversed().paint(&at)
            )
        }
    }

    fn current_line_len(&self) -> usize {
        length(&self.lines[self.cursor_row])
    }

    fn handle_key(&mut self, k: KeyEvent) {
        if k.is_ctrl_c() {
            self.cancelled = true;
            return;
        }
        if let Some('D') = k.ctrl_letter() {
            self.submitted = true;
            return;
        }
        match k.key {
            KeyKind::Rune | KeyKind::Space => self.insert_char(char_from(k)),
            KeyKind::Enter => self.split_line(),
            KeyKind::Backspace => self.backspace(),
            KeyKind::Delete => self.delete(),
            KeyKind::Left => self.move_left(),
            KeyKind::Right => self.move_right(),
            KeyKind::Up => self.move_vertical(-1),
            KeyKind::Down => self.move_vertical(1),
            KeyKind::Home => self.cursor_col = 0,
            KeyKind::End => self.cursor_col = self.current_line_len(),
            KeyKind::Escape => self.cancelled = true,
            _ => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        let line = &mut self.lines[self.cursor_row];
        *line = insert(line, self.cursor_col, s);
        self.cursor_col += 1;
    }

    fn split_line(&mut self) {
        let line = self.lines[self.cursor_row].clone();
        let before = substring(&line, 0, self.cursor_col);
        let after = substring(&line, self.cursor_col, length(&line));
        self.lines[self.cursor_row] = before;
        self.lines.insert(self.cursor_row + 1, after);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            *line = erase(line, self.cursor_col - 1, 1);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            let current = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_len();
            self.lines[self.cursor_row].push_str(&current);
        }
    }

    fn delete(&mut self) {
        if self.cursor_col < self.current_line_len() {
            let line = &mut self.lines[self.cursor_row];
            *line = erase(line, self.cursor_col, 1);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_len();
        }
    }

    fn move_right(&mut self) {
        if self.cursor_col < self.current_line_len() {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    fn move_vertical(&mut self, delta: i32) {
        let new_row = i64::from(self.cursor_row as i32 + delta);
        if new_row < 0 || new_row as usize >= self.lines.len() {
            return;
        }
        self.cursor_row = new_row as usize;
        self.cursor_col = self.cursor_col.min(self.current_line_len());
    }
}

fn char_from(k: KeyEvent) -> char {
    char::from_u32(k.rune).unwrap_or('\u{FFFD}')
}

/// Builder for a [`TextAreaModel`].
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    initial_value: String,
    line_numbers: bool,
    wrap_width: Option<usize>,
}

impl TextArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(mut self, s: impl Into<String>) -> Self {
        self.initial_value = s.into();
        self
    }

    #[must_use]
    pub const fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    #[must_use]
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width.max(1));
        self
    }

    #[must_use]
    pub fn run(self) -> Option<String> {
        let lines: Vec<String> = if self.initial_value.is_empty() {
            vec![String::new()]
        } else {
            self.initial_value.lines().map(str::to_string).collect()
        };
        let model = TextAreaModel {
            lines,
            cursor_row: 0,
            cursor_col: 0,
            line_numbers: self.line_numbers,
            wrap_width: self.wrap_width,
            submitted: false,
            cancelled: false,
        };
        match Program::new(model, ProgramConfig::new()).run() {
            Ok(m) if m.submitted => Some(m.lines.join("\n")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> TextAreaModel {
        TextAreaModel {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            line_numbers: false,
            wrap_width: None,
            submitted: false,
            cancelled: false,
        }
    }

    #[test]
    fn enter_splits_the_current_line() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('a'))));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Enter)));
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('b'))));
        assert_eq!(model.lines, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(model.cursor_row, 1);
    }

    #[test]
    fn backspace_at_line_start_merges_with_previous() {
        let mut model = fresh();
        model.lines = vec!["ab".to_string(), "cd".to_string()];
        model.cursor_row = 1;
        model.cursor_col = 0;
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Backspace)));
        assert_eq!(model.lines, vec!["abcd".to_string()]);
        assert_eq!(model.cursor_row, 0);
        assert_eq!(model.cursor_col, 2);
    }

    #[test]
    fn ctrl_d_submits() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(
            KeyEvent::new(KeyKind::Ctrl(3)).with_ctrl(true),
        ));
        assert!(model.submitted);
    }

    #[test]
    fn up_down_clamp_column_to_shorter_line() {
        let mut model = fresh();
        model.lines = vec!["abcdef".to_string(), "xy".to_string()];
        model.cursor_row = 0;
        model.cursor_col = 5;
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        assert_eq!(model.cursor_row, 1);
        assert_eq!(model.cursor_col, 2);
    }
}
