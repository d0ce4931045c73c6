//! A bordered, column-aligned data table, optionally row-selectable.

use ftui_core::{KeyEvent, KeyKind};
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::Style;
use ftui_text::utf8::display_width;

/// Border glyph set for a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Normal,
    Rounded,
    Double,
    Simple,
}

struct Glyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    tee_down: char,
    tee_up: char,
    cross: char,
}

impl BorderStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            Self::Normal => Glyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                tee_down: '┬',
                tee_up: '┴',
                cross: '┼',
            },
            Self::Rounded => Glyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
                tee_down: '┬',
                tee_up: '┴',
                cross: '┼',
            },
            Self::Double => Glyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                tee_down: '╦',
                tee_up: '╩',
                cross: '╬',
            },
            Self::Simple => Glyphs {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                tee_down: '+',
                tee_up: '+',
                cross: '+',
            },
        }
    }
}

/// State for a [`Table`].
#[derive(Debug, Clone)]
pub struct TableModel {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    border: BorderStyle,
    selectable: bool,
    pub cursor: usize,
    pub submitted: bool,
    pub cancelled: bool,
}

impl Model for TableModel {
    type UserMsg = ();

    fn update(mut self, msg: Msg<()>) -> (Self, Cmd<()>) {
        if !self.selectable || self.submitted || self.cancelled {
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
        let widths = self.column_widths();
        let g = self.border.glyphs();
        let mut out = String::new();
        out.push_str(&border_line(&widths, g.top_left, g.horizontal, g.tee_down, g.top_right));
        out.push('\n');
        out.push_str(&data_row(&self.headers, &widths, g.vertical));
        out.push('\n');
        out.push_str(&border_line(&widths, g.cross, g.horizontal, g.cross, g.cross));
        for (i, row) in self.rows.iter().enumerate() {
            out.push('\n');
            let line = data_row(row, &widths, g.vertical);
            if self.selectable && i == self.cursor {
                out.push_str(&Style::new().reversed().paint(&line));
            } else {
                out.push_str(&line);
            }
        }
        out.push('\n');
        out.push_str(&border_line(&widths, g.bottom_left, g.horizontal, g.tee_up, g.bottom_right));
        out
    }

    fn should_quit(&self) -> bool {
        self.submitted || self.cancelled
    }
}

impl TableModel {
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(display_width(cell));
                }
            }
        }
        widths
    }

    fn handle_key(&mut self, k: KeyEvent) {
        if k.is_ctrl_c() {
            self.cancelled = true;
            return;
        }
        match k.key {
            KeyKind::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyKind::Down => self.cursor = (self.cursor + 1).min(self.rows.len().saturating_sub(1)),
            KeyKind::Enter => self.submitted = true,
            KeyKind::Escape => self.cancelled = true,
            _ => {}
        }
    }
}

fn border_line(widths: &[usize], left: char, fill: char, sep: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        for _ in 0..(*w + 2) {
            out.push(fill);
        }
    }
    out.push(right);
    out
}

fn data_row(cells: &[String], widths: &[usize], vertical: char) -> String {
    let mut out = String::new();
    out.push(vertical);
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", String::as_str);
        let pad = w.saturating_sub(display_width(cell));
        out.push(' ');
        out.push_str(cell);
        for _ in 0..pad {
            out.push(' ');
        }
        out.push(' ');
        out.push(vertical);
    }
    out
}

/// Builder for a [`TableModel`].
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    border: BorderStyle,
    selectable: bool,
}

impl Table {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            border: BorderStyle::Normal,
            selectable: false,
        }
    }

    #[must_use]
    pub const fn border(mut self, style: BorderStyle) -> Self {
        self.border = style;
        self
    }

    #[must_use]
    pub const fn selectable(mut self, enabled: bool) -> Self {
        self.selectable = enabled;
        self
    }

    /// In selectable mode, runs the Elm loop and returns the chosen row
    /// index. In non-selectable mode, renders once and returns `None`.
    #[must_use]
    pub fn run(self) -> Option<usize> {
        if !self.selectable {
            println!("{}", self.view_static());
            return None;
        }
        let model = TableModel {
            headers: self.headers,
            rows: self.rows,
            border: self.border,
            selectable: true,
            cursor: 0,
            submitted: false,
            cancelled: false,
        };
        match Program::new(model, ProgramConfig::new()).run() {
            Ok(m) if m.submitted => Some(m.cursor),
            _ => None,
        }
    }

    fn view_static(&self) -> String {
        TableModel {
            headers: self.headers.clone(),
            rows: self.rows.clone(),
            border: self.border,
            selectable: false,
            cursor: 0,
            submitted: false,
            cancelled: false,
        }
        .view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> TableModel {
        TableModel {
            headers: vec!["name".into(), "age".into()],
            rows: vec![
                vec!["alice".into(), "30".into()],
                vec!["bo".into(), "41".into()],
            ],
            border: BorderStyle::Normal,
            selectable: true,
            cursor: 0,
            submitted: false,
            cancelled: false,
        }
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let model = fresh();
        let widths = model.column_widths();
        assert_eq!(widths, vec![5, 2]);
    }

    #[test]
    fn down_then_enter_submits_row_index() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Enter)));
        assert!(model.submitted);
        assert_eq!(model.cursor, 1);
    }

    #[test]
    fn non_selectable_mode_ignores_navigation() {
        let mut model = fresh();
        model.selectable = false;
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        assert_eq!(model.cursor, 0);
    }

    #[test]
    fn view_contains_border_glyphs_for_style() {
        let mut model = fresh();
        model.border = BorderStyle::Double;
        assert!(model.view().contains('╔'));
    }
}
