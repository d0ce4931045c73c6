//! The Model/Update/View event loop.

use std::io::{self, Write};

use ftui_core::error::Result;
use ftui_core::input_parser::InputParser;
use ftui_core::terminal::{self, AltScreenGuard, RawModeGuard, TtyByteSource};
use ftui_render::LiveRegion;

use crate::cmd::{Cmd, Msg, Scheduler};

/// A widget or application's Elm-style state machine.
///
/// Models are constructed by their caller (typically a widget's builder,
/// which seeds whatever configuration — prompt text, items, placeholder —
/// the program itself has no business knowing about) and handed to
/// [`Program::new`] already initialized. `init` is then called on that
/// instance to produce the first command, mirroring Bubble Tea's
/// `Init()`. `update`/`view` are plain methods (not hidden behind the
/// runtime) so tests can drive a model directly without spinning up a
/// `Program`.
pub trait Model: Sized {
    /// The payload type carried by `Msg::User`. Use `()` for models that
    /// never schedule a `Task`.
    type UserMsg: Send + 'static;

    /// The first command to run, before anything is read from input.
    /// Defaults to `Cmd::none()`.
    fn init(&self) -> Cmd<Self::UserMsg> {
        Cmd::none()
    }

    /// Consume a message, producing the next model and a command.
    fn update(self, msg: Msg<Self::UserMsg>) -> (Self, Cmd<Self::UserMsg>);

    /// Render the current model to a plain string.
    fn view(&self) -> String;

    /// Whether the runtime should stop after this model, independent of
    /// `Msg::Quit`. Defaults to `false`; widgets that track
    /// `submitted`/`cancelled` flags override this.
    fn should_quit(&self) -> bool {
        false
    }
}

/// Runtime configuration. A plain owned-builder: each setter takes and
/// returns `Self` by value, the same chained-setter shape the widget
/// builders use.
#[derive(Debug, Clone, Copy)]
pub struct ProgramConfig {
    with_alt_screen: bool,
    with_hidden_cursor: bool,
    input_timeout_ms: i32,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            with_alt_screen: false,
            with_hidden_cursor: false,
            input_timeout_ms: 50,
        }
    }
}

impl ProgramConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_alt_screen(mut self, enabled: bool) -> Self {
        self.with_alt_screen = enabled;
        self
    }

    #[must_use]
    pub const fn with_hidden_cursor(mut self, enabled: bool) -> Self {
        self.with_hidden_cursor = enabled;
        self
    }

    /// Clamped to a minimum of 1ms — zero or negative would either spin
    /// or block forever, neither of which is "a safe default."
    #[must_use]
    pub fn input_timeout_ms(mut self, ms: i32) -> Self {
        self.input_timeout_ms = ms.max(1);
        self
    }
}

/// Drives a [`Model`] through its Elm loop to completion.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
}

impl<M: Model> Program<M> {
    #[must_use]
    pub const fn new(model: M, config: ProgramConfig) -> Self {
        Self { model, config }
    }

    /// Run to completion: acquire raw mode, paint the initial view, loop
    /// until `Msg::Quit`/`should_quit`, tear down, and return the final
    /// model.
    ///
    /// Returns `Err` only if raw mode can't be acquired; callers (widget
    /// `run()` entry points) treat that as immediate cancellation, never
    /// as a propagated error condition the user sees as a panic.
    pub fn run(self) -> Result<M> {
        let Self {
            mut model,
            config,
        } = self;

        let raw_guard = RawModeGuard::acquire()?;
        let reader = raw_guard.reader()?;
        let mut byte_source = TtyByteSource::new(reader);
        let mut parser = InputParser::new();
        let mut stdout = io::stdout();

        let alt_guard = if config.with_alt_screen {
            Some(AltScreenGuard::enter(io::stdout(), config.with_hidden_cursor)?)
        } else {
            if config.with_hidden_cursor {
                terminal::cursor::hide(&mut stdout)?;
            }
            None
        };

        let resize_listener = terminal::ResizeListener::spawn().ok();

        let (scheduler, rx) = Scheduler::<M::UserMsg>::new();
        scheduler.spawn(model.init());

        let mut region = LiveRegion::new();
        let (cols, _rows) = terminal::size();
        region.render(&mut stdout, &model.view(), cols)?;

        loop {
            let msg = Self::next_message(
                config.input_timeout_ms,
                &rx,
                &resize_listener,
                &mut parser,
                &mut byte_source,
            )?;
            let Some(msg) = msg else {
                continue;
            };

            let is_quit = matches!(msg, Msg::Quit);
            let (new_model, cmd) = model.update(msg);
            model = new_model;
            scheduler.spawn(cmd);

            if is_quit || model.should_quit() {
                break;
            }

            let (cols, _rows) = terminal::size();
            region.render(&mut stdout, &model.view(), cols)?;
        }

        let (cols, _rows) = terminal::size();
        let _ = region.render(&mut stdout, &model.view(), cols);

        drop(alt_guard);
        if config.with_hidden_cursor && !config.with_alt_screen {
            let _ = terminal::cursor::show(&mut stdout);
        }
        drop(resize_listener);
        drop(raw_guard);

        Ok(model)
    }

    /// Priority order: drained command messages, then a resize
    /// notification, then a decoded key event. Never blocks longer than
    /// `input_timeout_ms` without re-checking the command queue.
    fn next_message(
        input_timeout_ms: i32,
        rx: &std::sync::mpsc::Receiver<Msg<M::UserMsg>>,
        resize_listener: &Option<terminal::ResizeListener>,
        parser: &mut InputParser,
        byte_source: &mut TtyByteSource,
    ) -> Result<Option<Msg<M::UserMsg>>> {
        if let Ok(msg) = rx.try_recv() {
            return Ok(Some(msg));
        }
        if resize_listener
            .as_ref()
            .is_some_and(terminal::ResizeListener::try_recv)
        {
            let (cols, rows) = terminal::size();
            return Ok(Some(Msg::WindowSize(cols, rows)));
        }
        match parser.read_key(byte_source, input_timeout_ms)? {
            Some(key) => Ok(Some(Msg::Key(key))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: i32,
        quit: bool,
    }

    impl Model for Counter {
        type UserMsg = ();

        fn update(mut self, msg: Msg<()>) -> (Self, Cmd<()>) {
            match msg {
                Msg::Key(k) if k.is_char('+') => self.value += 1,
                Msg::Quit => self.quit = true,
                _ => {}
            }
            (self, Cmd::none())
        }

        fn view(&self) -> String {
            format!("value: {}", self.value)
        }

        fn should_quit(&self) -> bool {
            self.quit
        }
    }

    #[test]
    fn update_is_a_pure_function_of_model_and_message() {
        use ftui_core::{KeyEvent, KeyKind};

        let model = Counter {
            value: 0,
            quit: false,
        };
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('+'))));
        assert_eq!(model.value, 1);
        assert!(!model.should_quit());

        let (model, _) = model.update(Msg::Key(KeyEvent::new(KeyKind::Escape)));
        assert_eq!(model.value, 1);
    }

    #[test]
    fn quit_message_sets_terminal_flag() {
        let model = Counter {
            value: 0,
            quit: false,
        };
        let (model, _) = model.update(Msg::Quit);
        assert!(model.should_quit());
    }

    #[test]
    fn config_defaults_match_spec() {
        let cfg = ProgramConfig::default();
        assert!(!cfg.with_alt_screen);
        assert!(!cfg.with_hidden_cursor);
        assert_eq!(cfg.input_timeout_ms, 50);
    }
}
