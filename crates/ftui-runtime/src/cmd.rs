//! Messages and commands: the two halves of the Elm loop's effect system.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use ftui_core::KeyEvent;

/// A value delivered to [`crate::program::Model::update`].
///
/// Closed per build (this crate's `UserMsg` type parameter fixes what
/// `User` can carry), open in spirit — an application picks its own
/// `UserMsg` payload type.
pub enum Msg<T> {
    Key(KeyEvent),
    Tick(u64),
    Quit,
    WindowSize(u16, u16),
    User(T),
}

impl<T: Clone> Clone for Msg<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Key(k) => Self::Key(*k),
            Self::Tick(id) => Self::Tick(*id),
            Self::Quit => Self::Quit,
            Self::WindowSize(c, r) => Self::WindowSize(*c, *r),
            Self::User(t) => Self::User(t.clone()),
        }
    }
}

/// An opaque producer of at most one message.
///
/// `update` returns a `Cmd` alongside the new model; the runtime schedules
/// it off the main thread (except `None`/`Quit`, which need no thread —
/// see [`Scheduler::spawn`]).
pub enum Cmd<T> {
    /// No-op.
    None,
    /// Produces [`Msg::Quit`] immediately.
    Quit,
    /// Every sub-command is scheduled independently; all of their
    /// messages eventually reach the loop.
    Batch(Vec<Cmd<T>>),
    /// Sleep `delay`, then produce `Msg::Tick(id)`.
    Tick { delay: Duration, id: u64 },
    /// Run `f` on a worker thread and forward its result as `Msg::User`.
    Task(Box<dyn FnOnce() -> T + Send + 'static>),
}

impl<T> Cmd<T> {
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    #[must_use]
    pub const fn quit() -> Self {
        Self::Quit
    }

    #[must_use]
    pub fn batch(cmds: impl Into<Vec<Self>>) -> Self {
        Self::Batch(cmds.into())
    }

    #[must_use]
    pub const fn tick(delay: Duration, id: u64) -> Self {
        Self::Tick { delay, id }
    }

    pub fn task(f: impl FnOnce() -> T + Send + 'static) -> Self {
        Self::Task(Box::new(f))
    }
}

/// Dispatches [`Cmd`]s, pushing the resulting [`Msg`] (if any) onto a
/// shared channel the main loop drains every iteration.
///
/// One short-lived thread per leaf command (`Tick`, `Task`); a thread
/// pool would be a valid optimization but isn't required.
pub struct Scheduler<T> {
    tx: mpsc::Sender<Msg<T>>,
}

impl<T: Send + 'static> Scheduler<T> {
    #[must_use]
    pub fn new() -> (Self, mpsc::Receiver<Msg<T>>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Dispatch `cmd`. `Batch` recurses so every sub-command is scheduled
    /// independently and none are skipped.
    pub fn spawn(&self, cmd: Cmd<T>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                let _ = self.tx.send(Msg::Quit);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.spawn(c);
                }
            }
            Cmd::Tick { delay, id } => {
                let tx = self.tx.clone();
                thread::spawn(move || {
                    thread::sleep(delay);
                    let _ = tx.send(Msg::Tick(id));
                });
            }
            Cmd::Task(f) => {
                let tx = self.tx.clone();
                thread::spawn(move || {
                    let result = f();
                    let _ = tx.send(Msg::User(result));
                });
            }
        }
    }
}
