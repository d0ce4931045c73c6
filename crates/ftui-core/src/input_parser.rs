//! Byte-stream input decoder.
//!
//! Turns a stream of raw TTY bytes into [`KeyEvent`]s: ASCII control codes,
//! CSI/SS3 escape sequences, and UTF-8 runes. Modeled on the teacher
//! crate's `InputParser` state machine, trimmed to the states this spec
//! needs — no OSC, bracketed paste, mouse, or focus handling, all of which
//! are Non-goals here.
//!
//! # Design
//!
//! The parser doesn't own the byte source; callers supply one through
//! [`ByteSource`], which abstracts "give me the next byte, waiting at most
//! `timeout_ms`". This keeps the state machine itself synchronous and
//! trivially testable (feed it a fixed byte slice) while the real TTY
//! implementation (see `crate::terminal`) handles the underlying
//! poll/read.
//!
//! The `ESC` ambiguity — a lone Escape key vs. the start of an Alt-chord or
//! a CSI/SS3 sequence — is resolved with a short grace timeout, the
//! standard xterm convention.

use std::io;

/// Grace period used when peeking past a lone `ESC` byte.
pub const ESC_GRACE_MS: i32 = 50;

use crate::event::{KeyEvent, KeyKind};

/// Abstracts "read the next input byte, waiting at most `timeout_ms`
/// milliseconds."
///
/// `timeout_ms < 0` blocks indefinitely; `timeout_ms == 0` polls without
/// waiting. Returns `Ok(None)` on timeout, never on EOF (implementations
/// should surface a closed stream as a perpetual timeout so the runtime's
/// loop simply stops producing key messages).
pub trait ByteSource {
    /// Read one byte, or `Ok(None)` if none arrived within `timeout_ms`.
    fn next_byte(&mut self, timeout_ms: i32) -> io::Result<Option<u8>>;
}

/// An in-memory [`ByteSource`] for tests: never blocks, returns `Ok(None)`
/// once the buffer is exhausted regardless of the requested timeout.
#[derive(Debug, Default, Clone)]
pub struct SliceSource {
    bytes: Vec<u8>,
    pos: usize,
}

impl SliceSource {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
        }
    }
}

impl ByteSource for SliceSource {
    fn next_byte(&mut self, _timeout_ms: i32) -> io::Result<Option<u8>> {
        if self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            self.pos += 1;
            Ok(Some(b))
        } else {
            Ok(None)
        }
    }
}

/// Stateless decoder: each call to [`InputParser::read_key`] consumes
/// exactly the bytes of one key event (or times out).
///
/// The parser carries no state between calls — unlike the teacher's
/// byte-at-a-time state machine, which must because `parse` can be handed
/// partial chunks, this one is handed a `ByteSource` it can pull from
/// until a sequence completes, so there's nothing to persist.
#[derive(Debug, Default)]
pub struct InputParser {
    _private: (),
}

impl InputParser {
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decode the next key event, or `Ok(None)` on timeout.
    ///
    /// `timeout_ms < 0` blocks. Mid-sequence bytes (CSI parameters, UTF-8
    /// continuation bytes) are read with the `ESC_GRACE_MS` grace window
    /// regardless of `timeout_ms`, since a sequence that started has
    /// either already arrived in the kernel's input buffer or the
    /// terminal is misbehaving.
    pub fn read_key(
        &mut self,
        source: &mut impl ByteSource,
        timeout_ms: i32,
    ) -> io::Result<Option<KeyEvent>> {
        let Some(b) = source.next_byte(timeout_ms)? else {
            return Ok(None);
        };
        self.decode(b, source).map(Some)
    }

    fn decode(&mut self, b: u8, source: &mut impl ByteSource) -> io::Result<KeyEvent> {
        match b {
            0x1B => self.decode_escape(source),
            0x09 => Ok(KeyEvent::new(KeyKind::Tab)),
            0x0A | 0x0D => Ok(KeyEvent::new(KeyKind::Enter)),
            0x03 => Ok(KeyEvent::new(KeyKind::Ctrl(2)).with_ctrl(true)),
            0x01..=0x1A => {
                let n = b - 0x01;
                Ok(KeyEvent::new(KeyKind::Ctrl(n)).with_ctrl(true))
            }
            0x20 => Ok(KeyEvent {
                key: KeyKind::Space,
                rune: u32::from(b' '),
                alt: false,
                ctrl: false,
                shift: false,
            }),
            0x7F => Ok(KeyEvent::new(KeyKind::Backspace)),
            0x00 | 0x1C..=0x1F => Ok(KeyEvent::new(KeyKind::Unknown)),
            _ => self.decode_utf8(b, source),
        }
    }

    fn decode_escape(&mut self, source: &mut impl ByteSource) -> io::Result<KeyEvent> {
        let Some(b) = source.next_byte(ESC_GRACE_MS)? else {
            return Ok(KeyEvent::new(KeyKind::Escape));
        };
        match b {
            b'[' => self.decode_csi(source),
            b'O' => self.decode_ss3(source),
            _ => {
                // Alt-chord: whatever follows is the "real" key, modified.
                if let Ok(ev) = self.decode(b, source) {
                    Ok(ev.with_alt(true))
                } else {
                    Ok(KeyEvent::new(KeyKind::Unknown))
                }
            }
        }
    }

    fn decode_csi(&mut self, source: &mut impl ByteSource) -> io::Result<KeyEvent> {
        let mut params: Vec<u8> = Vec::with_capacity(4);
        loop {
            let Some(b) = source.next_byte(ESC_GRACE_MS)? else {
                return Ok(KeyEvent::new(KeyKind::Unknown));
            };
            match b {
                0x30..=0x3F | 0x20..=0x2F => params.push(b),
                0x40..=0x7E => return Ok(Self::map_csi_final(b, &params)),
                _ => return Ok(KeyEvent::new(KeyKind::Unknown)),
            }
        }
    }

    fn decode_ss3(&mut self, source: &mut impl ByteSource) -> io::Result<KeyEvent> {
        let Some(b) = source.next_byte(ESC_GRACE_MS)? else {
            return Ok(KeyEvent::new(KeyKind::Unknown));
        };
        let key = match b {
            b'P' => KeyKind::F(1),
            b'Q' => KeyKind::F(2),
            b'R' => KeyKind::F(3),
            b'S' => KeyKind::F(4),
            _ => KeyKind::Unknown,
        };
        Ok(KeyEvent::new(key))
    }

    fn map_csi_final(final_byte: u8, params: &[u8]) -> KeyEvent {
        // CSI Z is shift-tab; there's no dedicated BackTab variant, so it
        // surfaces as Tab with the shift flag set.
        if final_byte == b'Z' {
            return KeyEvent::new(KeyKind::Tab).with_shift(true);
        }
        let key = match final_byte {
            b'A' => KeyKind::Up,
            b'B' => KeyKind::Down,
            b'C' => KeyKind::Right,
            b'D' => KeyKind::Left,
            b'H' => KeyKind::Home,
            b'F' => KeyKind::End,
            b'~' => return Self::map_csi_tilde(params),
            _ => KeyKind::Unknown,
        };
        KeyEvent::new(key)
    }

    fn map_csi_tilde(params: &[u8]) -> KeyEvent {
        let first = std::str::from_utf8(params)
            .ok()
            .and_then(|s| s.split(';').next())
            .and_then(|s| s.parse::<u32>().ok());
        let key = match first {
            Some(1 | 7) => KeyKind::Home,
            Some(4 | 8) => KeyKind::End,
            Some(3) => KeyKind::Delete,
            Some(5) => KeyKind::PageUp,
            Some(6) => KeyKind::PageDown,
            Some(15) => KeyKind::F(5),
            Some(17) => KeyKind::F(6),
            Some(18) => KeyKind::F(7),
            Some(19) => KeyKind::F(8),
            Some(20) => KeyKind::F(9),
            Some(21) => KeyKind::F(10),
            Some(23) => KeyKind::F(11),
            Some(24) => KeyKind::F(12),
            _ => KeyKind::Unknown,
        };
        KeyEvent::new(key)
    }

    fn decode_utf8(&mut self, lead: u8, source: &mut impl ByteSource) -> io::Result<KeyEvent> {
        let len = char_length(lead);
        if len == 1 {
            // Printable ASCII (0x21..=0x7E covered here; 0x20 and 0x7F
            // are handled above).
            return Ok(KeyEvent::rune(u32::from(lead)));
        }
        let mut buf = [0u8; 4];
        buf[0] = lead;
        for slot in buf.iter_mut().take(usize::from(len)).skip(1) {
            let Some(b) = source.next_byte(ESC_GRACE_MS)? else {
                return Ok(KeyEvent::new(KeyKind::Unknown));
            };
            if b & 0xC0 != 0x80 {
                return Ok(KeyEvent::new(KeyKind::Unknown));
            }
            *slot = b;
        }
        match std::str::from_utf8(&buf[..usize::from(len)]) {
            Ok(s) => match s.chars().next() {
                Some(c) => Ok(KeyEvent::rune(c as u32)),
                None => Ok(KeyEvent::new(KeyKind::Unknown)),
            },
            Err(_) => Ok(KeyEvent::new(KeyKind::Unknown)),
        }
    }
}

/// Number of bytes (1..=4) a UTF-8 sequence starting with `first_byte`
/// occupies, per the high-bit pattern. Continuation bytes (`10xxxxxx`) and
/// invalid lead bytes (`0xF8..=0xFF`) are reported as length 1 so callers
/// make progress rather than looping.
#[must_use]
pub const fn char_length(first_byte: u8) -> u8 {
    match first_byte {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csi_up_arrow() {
        let mut p = InputParser::new();
        let mut s = SliceSource::new(*b"\x1b[A");
        let ev = p.read_key(&mut s, -1).unwrap().unwrap();
        assert_eq!(ev.key, KeyKind::Up);
    }

    #[test]
    fn lone_escape_times_out_to_escape_key() {
        let mut p = InputParser::new();
        let mut s = SliceSource::new(*b"\x1b");
        let ev = p.read_key(&mut s, -1).unwrap().unwrap();
        assert_eq!(ev.key, KeyKind::Escape);
    }

    #[test]
    fn utf8_rune() {
        let mut p = InputParser::new();
        // U+65E5 "日" = 0xE6 0x97 0xA5
        let mut s = SliceSource::new(*b"\xe6\x97\xa5");
        let ev = p.read_key(&mut s, -1).unwrap().unwrap();
        assert_eq!(ev.key, KeyKind::Rune);
        assert_eq!(ev.rune, 0x65E5);
    }

    #[test]
    fn empty_source_is_no_event() {
        let mut p = InputParser::new();
        let mut s = SliceSource::new(Vec::new());
        assert!(p.read_key(&mut s, -1).unwrap().is_none());
    }

    #[test]
    fn ctrl_c() {
        let mut p = InputParser::new();
        let mut s = SliceSource::new(vec![0x03]);
        let ev = p.read_key(&mut s, -1).unwrap().unwrap();
        assert_eq!(ev.key, KeyKind::Ctrl(2));
        assert!(ev.ctrl);
    }

    #[test]
    fn backspace_and_delete() {
        let mut p = InputParser::new();
        let mut s = SliceSource::new(vec![0x7F]);
        assert_eq!(
            p.read_key(&mut s, -1).unwrap().unwrap().key,
            KeyKind::Backspace
        );

        let mut p = InputParser::new();
        let mut s = SliceSource::new(*b"\x1b[3~");
        assert_eq!(
            p.read_key(&mut s, -1).unwrap().unwrap().key,
            KeyKind::Delete
        );
    }

    #[test]
    fn ss3_function_keys() {
        let mut p = InputParser::new();
        let mut s = SliceSource::new(*b"\x1bOP");
        assert_eq!(p.read_key(&mut s, -1).unwrap().unwrap().key, KeyKind::F(1));
    }

    #[test]
    fn alt_chord() {
        let mut p = InputParser::new();
        let mut s = SliceSource::new(*b"\x1bx");
        let ev = p.read_key(&mut s, -1).unwrap().unwrap();
        assert_eq!(ev.key, KeyKind::Rune);
        assert_eq!(ev.rune, u32::from(b'x'));
        assert!(ev.alt);
    }

    #[test]
    fn char_length_high_bits() {
        assert_eq!(char_length(b'a'), 1);
        assert_eq!(char_length(0xC2), 2);
        assert_eq!(char_length(0xE6), 3);
        assert_eq!(char_length(0xF0), 4);
    }
}
