//! A full-screen, scrollable content viewer (`less`-style).

use ftui_core::KeyEvent;
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::Style;

use crate::viewport::ViewportModel;

/// State for a [`Pager`].
pub struct PagerModel {
    viewport: ViewportModel,
    line_numbers: bool,
    pub quit: bool,
}

impl Model for PagerModel {
    type UserMsg = ();

    fn update(mut self, msg: Msg<()>) -> (Self, Cmd<()>) {
        if self.quit {
            return (self, Cmd::none());
        }
        match msg {
            Msg::Key(k) if k.is_ctrl_c() => self.quit = true,
            Msg::Key(k) if k.is_char('q') => self.quit = true,
            Msg::Key(k) if k.key == ftui_core::KeyKind::Escape => self.quit = true,
            Msg::Key(k) => {
                self.viewport.handle_key(k);
            }
            Msg::Quit => self.quit = true,
            _ => {}
        }
        (self, Cmd::none())
    }

    fn view(&self) -> String {
        let body = if self.line_numbers {
            self.viewport
                .visible()
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{:>4} {line}", self.viewport.offset + i + 1))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.viewport.view()
        };
        let status = format!("-- {:.0}% --", self.viewport.scroll_percent() * 100.0);
        format!("{body}\n{}", Style::new().dim().paint(&status))
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}

/// Builder for a [`PagerModel`].
pub struct Pager {
    content: String,
    height: usize,
    line_numbers: bool,
}

impl Pager {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            height: 20,
            line_numbers: false,
        }
    }

    #[must_use]
    pub fn height(mut self, rows: usize) -> Self {
        self.height = rows.max(1);
        self
    }

    #[must_use]
    pub const fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Runs full-screen until `q`/Esc/Ctrl-C.
    pub fn run(self) {
        let model = PagerModel {
            viewport: ViewportModel::new(&self.content, self.height.saturating_sub(1).max(1)),
            line_numbers: self.line_numbers,
            quit: false,
        };
        let config = ProgramConfig::new()
            .with_alt_screen(true)
            .with_hidden_cursor(true);
        let _ = Program::new(model, config).run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_core::KeyKind;

    fn fresh() -> PagerModel {
        PagerModel {
            viewport: ViewportModel::new("a\nb\nc\nd\ne\nf", 3),
            line_numbers: false,
            quit: false,
        }
    }

    #[test]
    fn q_quits() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('q'))));
        assert!(model.quit);
    }

    #[test]
    fn escape_quits() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Escape)));
        assert!(model.quit);
    }

    #[test]
    fn navigation_keys_delegate_to_viewport() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        assert_eq!(model.viewport.offset, 1);
    }

    #[test]
    fn line_numbers_prefix_visible_lines_when_enabled() {
        let mut model = fresh();
        model.line_numbers = true;
        let view = model.view();
        assert!(view.starts_with("   1 a"));

        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Down)));
        assert!(model.view().starts_with("   2 b"));
    }

    #[test]
    fn no_line_numbers_leaves_content_unprefixed() {
        let model = fresh();
        assert!(model.view().starts_with('a'));
    }
}
