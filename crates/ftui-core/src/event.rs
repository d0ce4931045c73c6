//! Keyboard event types.
//!
//! ftui's event model is intentionally small: a single [`KeyEvent`] struct
//! carrying a tagged [`KeyKind`] plus the raw Unicode code point (for
//! `Rune`/`Space`) and three modifier flags. There is no mouse, paste, or
//! focus event here — those are Non-goals for this crate; see
//! [`crate::input_parser`] for the byte-stream decoder that produces these
//! values.

/// The kind of key that was pressed.
///
/// `Rune` and `Space` carry their code point in [`KeyEvent::rune`]; every
/// other variant leaves `rune` at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A printable Unicode code point (see [`KeyEvent::rune`]).
    Rune,
    /// The space bar (`0x20`), kept distinct from `Rune` for widgets that
    /// bind it separately (page-down, etc).
    Space,
    Enter,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
    /// Function key, `1..=12`.
    F(u8),
    /// Control-letter chord, `0` for Ctrl-A through `25` for Ctrl-Z.
    ///
    /// `Ctrl-C` is index `2`; decoders surface it through this variant with
    /// `KeyEvent::ctrl == true` rather than as a separate signal — the
    /// runtime installs no signal handler of its own (see the runtime's
    /// cancellation section).
    Ctrl(u8),
    /// A byte or sequence the decoder could not map to anything above.
    /// Never an error — see [`crate::error::Error`] for what *is*
    /// propagated.
    Unknown,
}

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyKind,
    /// Unicode code point for `Rune`/`Space`; zero otherwise.
    pub rune: u32,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(key: KeyKind) -> Self {
        Self {
            key,
            rune: 0,
            alt: false,
            ctrl: false,
            shift: false,
        }
    }

    #[must_use]
    pub const fn rune(rune: u32) -> Self {
        Self {
            key: KeyKind::Rune,
            rune,
            alt: false,
            ctrl: false,
            shift: false,
        }
    }

    #[must_use]
    pub const fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    #[must_use]
    pub const fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    #[must_use]
    pub const fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// True for a plain (no modifier) rune matching `c`.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        self.key == KeyKind::Rune && self.rune == c as u32 && !self.alt && !self.ctrl
    }

    /// True for `Ctrl-C` (`KeyKind::Ctrl(2)`), the chord every widget
    /// treats as cancel. The runtime installs no signal handler of its
    /// own — see the runtime's cancellation section — so this is the
    /// only way a widget observes it.
    #[must_use]
    pub const fn is_ctrl_c(&self) -> bool {
        matches!(self.key, KeyKind::Ctrl(2))
    }

    /// The `CtrlA..=CtrlZ` letter this event represents, if any.
    #[must_use]
    pub const fn ctrl_letter(&self) -> Option<char> {
        match self.key {
            KeyKind::Ctrl(n) if n < 26 => Some((b'A' + n) as char),
            _ => None,
        }
    }
}
