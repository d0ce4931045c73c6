//! A yes/no prompt.

use ftui_core::{KeyEvent, KeyKind};
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::{Color, Style};

/// State for a [`Confirm`] prompt.
#[derive(Debug, Clone)]
pub struct ConfirmModel {
    prompt: String,
    yes_label: String,
    no_label: String,
    /// `true` selects "yes".
    pub value: bool,
    pub submitted: bool,
    pub cancelled: bool,
}

impl Model for ConfirmModel {
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
        let (yes, no) = if self.value {
            (
                Style::new().reversed().paint(&format!(" {} ", self.yes_label)),
                format!(" {} ", self.no_label),
            )
        } else {
            (
                format!(" {} ", self.yes_label),
                Style::new().reversed().paint(&format!(" {} ", self.no_label)),
            )
        };
        format!("{}  {yes}/{no}", self.prompt)
    }

    fn should_quit(&self) -> bool {
        self.submitted || self.cancelled
    }
}

impl ConfirmModel {
    fn handle_key(&mut self, k: KeyEvent) {
        match k.key {
            KeyKind::Left | KeyKind::Right | KeyKind::Tab => self.value = !self.value,
            KeyKind::Rune if k.rune == u32::from('h') => self.value = true,
            KeyKind::Rune if k.rune == u32::from('l') => self.value = false,
            KeyKind::Rune if k.rune == u32::from('y') => {
                self.value = true;
                self.submitted = true;
            }
            KeyKind::Rune if k.rune == u32::from('n') => {
                self.value = false;
                self.submitted = true;
            }
            KeyKind::Enter => self.submitted = true,
            KeyKind::Escape => self.cancelled = true,
            _ if k.is_ctrl_c() => self.cancelled = true,
            _ => {}
        }
    }
}

/// Builder for a [`ConfirmModel`] prompt.
#[derive(Debug, Clone)]
pub struct Confirm {
    prompt: String,
    yes_label: String,
    no_label: String,
    default_yes: bool,
}

impl Confirm {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            default_yes: true,
        }
    }

    #[must_use]
    pub fn yes_label(mut self, label: impl Into<String>) -> Self {
        self.yes_label = label.into();
        self
    }

    #[must_use]
    pub fn no_label(mut self, label: impl Into<String>) -> Self {
        self.no_label = label.into();
        self
    }

    #[must_use]
    pub const fn default_yes(mut self, value: bool) -> Self {
        self.default_yes = value;
        self
    }

    /// Run the prompt. Returns `None` on cancellation (Esc/Ctrl-C) or if
    /// raw mode can't be acquired.
    #[must_use]
    pub fn run(self) -> Option<bool> {
        let model = ConfirmModel {
            prompt: self.prompt,
            yes_label: self.yes_label,
            no_label: self.no_label,
            value: self.default_yes,
            submitted: false,
            cancelled: false,
        };
        let program = Program::new(model, ProgramConfig::new());
        match program.run() {
            Ok(m) if m.submitted => Some(m.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ConfirmModel {
        ConfirmModel {
            prompt: "Continue?".into(),
            yes_label: "Yes".into(),
            no_label: "No".into(),
            value: false,
            submitted: false,
            cancelled: false,
        }
    }

    #[test]
    fn y_shortcut_submits_yes() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('y'))));
        assert!(model.value);
        assert!(model.submitted);
    }

    #[test]
    fn n_shortcut_submits_no() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('n'))));
        assert!(!model.value);
        assert!(model.submitted);
    }

    #[test]
    fn left_right_toggle_without_submitting() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Right)));
        assert!(!model.value);
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Left)));
        assert!(model.value);
        assert!(!model.submitted);
    }

    #[test]
    fn escape_cancels() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Escape)));
        assert!(model.cancelled);
        assert!(model.should_quit());
    }

    #[test]
    fn terminal_state_ignores_further_keys() {
        let model = fresh();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('y'))));
        let (model2, _) = model.clone().update(Msg::Key(KeyEvent::rune(u32::from('n'))));
        assert_eq!(model2.value, model.value);
    }
}
