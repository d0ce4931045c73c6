//! Terminal I/O: raw mode, cursor/screen control, alternate screen, size
//! queries, and a SIGWINCH-driven resize listener.
//!
//! Grounded in the teacher's `ftui-tty` crate (its `RawModeGuard`, escape
//! sequence tables, and `ResizeSignalGuard`), trimmed to what this spec
//! asks for: no mouse, no bracketed paste, no focus events, no Kitty
//! keyboard protocol.

use std::fs::File;
use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;

use crate::error::{Error, Result};
use crate::input_parser::ByteSource;
use crate::logging::{debug, warn};

const CURSOR_HIDE: &[u8] = b"\x1b[?25l";
const CURSOR_SHOW: &[u8] = b"\x1b[?25h";
const ALT_SCREEN_ENTER: &[u8] = b"\x1b[?1049h";
const ALT_SCREEN_LEAVE: &[u8] = b"\x1b[?1049l";
const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
const CURSOR_HOME: &[u8] = b"\x1b[H";
const CLEAR_LINE: &[u8] = b"\x1b[2K";
const CLEAR_TO_END: &[u8] = b"\x1b[J";
const CURSOR_SAVE: &[u8] = b"\x1b[s";
const CURSOR_RESTORE: &[u8] = b"\x1b[u";

/// Process-wide guard against two concurrent raw-mode sessions. The
/// controlling TTY is process-global state; see [`Error::AlreadyActive`].
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Scoped raw-mode session.
///
/// Captures the prior `termios` on acquire and restores it (best-effort)
/// on drop, regardless of exit path — including panic unwinding.
/// Re-entrant acquisition is rejected with [`Error::AlreadyActive`].
pub struct RawModeGuard {
    #[cfg(unix)]
    original: nix::sys::termios::Termios,
    #[cfg(unix)]
    tty: File,
}

impl RawModeGuard {
    /// Acquire raw mode on the controlling terminal.
    ///
    /// Fails with [`Error::NotATty`] if `/dev/tty` can't be opened or
    /// isn't a terminal, and with [`Error::AlreadyActive`] if another
    /// guard is already alive in this process.
    #[cfg(unix)]
    pub fn acquire() -> Result<Self> {
        if RAW_MODE_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::AlreadyActive);
        }

        let tty = File::open("/dev/tty").map_err(|_| {
            RAW_MODE_ACTIVE.store(false, Ordering::Release);
            Error::NotATty
        })?;

        let original = nix::sys::termios::tcgetattr(&tty).map_err(|e| {
            RAW_MODE_ACTIVE.store(false, Ordering::Release);
            Error::Io(io::Error::other(e))
        })?;

        let mut raw = original.clone();
        nix::sys::termios::cfmakeraw(&mut raw);
        if let Err(e) =
            nix::sys::termios::tcsetattr(&tty, nix::sys::termios::SetArg::TCSAFLUSH, &raw)
        {
            RAW_MODE_ACTIVE.store(false, Ordering::Release);
            return Err(Error::Io(io::Error::other(e)));
        }

        debug!("raw mode acquired");
        Ok(Self { original, tty })
    }

    /// Whether this guard holds an active raw-mode session.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        true
    }

    /// A `Read` handle onto the controlling tty, for feeding
    /// [`crate::input_parser::InputParser`].
    #[cfg(unix)]
    pub fn reader(&self) -> io::Result<File> {
        self.tty.try_clone()
    }
}

#[cfg(unix)]
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = nix::sys::termios::tcsetattr(
            &self.tty,
            nix::sys::termios::SetArg::TCSAFLUSH,
            &self.original,
        );
        RAW_MODE_ACTIVE.store(false, Ordering::Release);
        debug!("raw mode released");
    }
}

/// A [`ByteSource`] backed by a raw-mode tty `File`, polling with
/// `rustix::event::poll` so timeouts are honored without blocking forever.
#[cfg(unix)]
pub struct TtyByteSource {
    file: File,
}

#[cfg(unix)]
impl TtyByteSource {
    #[must_use]
    pub const fn new(file: File) -> Self {
        Self { file }
    }
}

#[cfg(unix)]
impl ByteSource for TtyByteSource {
    fn next_byte(&mut self, timeout_ms: i32) -> io::Result<Option<u8>> {
        use std::os::fd::AsFd;

        let mut fds = [rustix::event::PollFd::new(
            &self.file.as_fd(),
            rustix::event::PollFlags::IN,
        )];
        let timeout = if timeout_ms < 0 {
            None
        } else {
            Some(std::time::Duration::from_millis(timeout_ms as u64))
        };
        let n = rustix::event::poll(&mut fds, timeout).map_err(io::Error::from)?;
        if n == 0 {
            return Ok(None);
        }
        let mut buf = [0u8; 1];
        match self.file.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Scoped alternate-screen session.
///
/// On acquire, switches to the alternate buffer, clears it, homes the
/// cursor, and optionally hides it. On drop, restores the primary buffer
/// and shows the cursor.
pub struct AltScreenGuard<W: Write> {
    out: W,
}

impl<W: Write> AltScreenGuard<W> {
    pub fn enter(mut out: W, hide_cursor: bool) -> io::Result<Self> {
        out.write_all(ALT_SCREEN_ENTER)?;
        out.write_all(CLEAR_SCREEN)?;
        out.write_all(CURSOR_HOME)?;
        if hide_cursor {
            out.write_all(CURSOR_HIDE)?;
        }
        out.flush()?;
        debug!("alt screen entered");
        Ok(Self { out })
    }
}

impl<W: Write> Drop for AltScreenGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(CURSOR_SHOW);
        let _ = self.out.write_all(ALT_SCREEN_LEAVE);
        let _ = self.out.flush();
        debug!("alt screen left");
    }
}

/// String-emitting cursor/screen control API. Every call writes directly
/// to `w` and flushes; there is no terminfo lookup, only the xterm/ANSI
/// defaults this module documents.
pub mod cursor {
    use std::io::{self, Write};

    pub fn hide(w: &mut impl Write) -> io::Result<()> {
        w.write_all(b"\x1b[?25l")?;
        w.flush()
    }

    pub fn show(w: &mut impl Write) -> io::Result<()> {
        w.write_all(b"\x1b[?25h")?;
        w.flush()
    }

    pub fn up(w: &mut impl Write, n: u16) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        write!(w, "\x1b[{n}A")?;
        w.flush()
    }

    pub fn down(w: &mut impl Write, n: u16) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        write!(w, "\x1b[{n}B")?;
        w.flush()
    }

    pub fn left(w: &mut impl Write, n: u16) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        write!(w, "\x1b[{n}D")?;
        w.flush()
    }

    pub fn right(w: &mut impl Write, n: u16) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        write!(w, "\x1b[{n}C")?;
        w.flush()
    }

    pub fn column(w: &mut impl Write, n: u16) -> io::Result<()> {
        write!(w, "\x1b[{n}G")?;
        w.flush()
    }

    pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
        w.write_all(super::CLEAR_LINE)?;
        w.flush()
    }

    pub fn clear_to_end(w: &mut impl Write) -> io::Result<()> {
        w.write_all(super::CLEAR_TO_END)?;
        w.flush()
    }

    pub fn save(w: &mut impl Write) -> io::Result<()> {
        w.write_all(super::CURSOR_SAVE)?;
        w.flush()
    }

    pub fn restore(w: &mut impl Write) -> io::Result<()> {
        w.write_all(super::CURSOR_RESTORE)?;
        w.flush()
    }
}

/// Query the controlling terminal's size via `TIOCGWINSZ`, falling back
/// to `(80, 24)` if stdin isn't a tty or the ioctl fails. Never cached —
/// call again whenever a fresh value is needed.
#[must_use]
#[cfg(unix)]
pub fn size() -> (u16, u16) {
    match File::open("/dev/tty").and_then(|f| rustix::termios::tcgetwinsize(&f).map_err(io::Error::from)) {
        Ok(ws) if ws.ws_col > 0 && ws.ws_row > 0 => (ws.ws_col, ws.ws_row),
        _ => (80, 24),
    }
}

/// Listens for `SIGWINCH` on a dedicated thread and forwards a
/// notification (not the size itself — callers re-query via [`size`])
/// through an `mpsc` channel. Mirrors the teacher's `ResizeSignalGuard`.
#[cfg(unix)]
pub struct ResizeListener {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
    rx: mpsc::Receiver<()>,
}

#[cfg(unix)]
impl ResizeListener {
    pub fn spawn() -> io::Result<Self> {
        use signal_hook::consts::signal::SIGWINCH;
        use signal_hook::iterator::Signals;

        let (tx, rx) = mpsc::sync_channel(1);
        let mut signals = Signals::new([SIGWINCH]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for _ in signals.forever() {
                // Coalesce storms: one pending notification is enough,
                // since the receiver re-queries the authoritative size.
                if tx.try_send(()).is_err() {
                    warn!("resize notification dropped, receiver full");
                }
            }
        });

        Ok(Self {
            handle,
            thread: Some(thread),
            rx,
        })
    }

    /// Non-blocking check for a pending resize notification.
    pub fn try_recv(&self) -> bool {
        self.rx.try_recv().is_ok()
    }
}

#[cfg(unix)]
impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_sequences_are_well_formed() {
        let mut buf = Vec::new();
        cursor::up(&mut buf, 3).unwrap();
        assert_eq!(buf, b"\x1b[3A");

        let mut buf = Vec::new();
        cursor::hide(&mut buf).unwrap();
        assert_eq!(buf, CURSOR_HIDE);
    }

    #[test]
    fn zero_count_moves_are_no_ops() {
        let mut buf = Vec::new();
        cursor::up(&mut buf, 0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn size_has_a_fallback() {
        let (cols, rows) = size();
        assert!(cols > 0 && rows > 0);
    }
}
