//! Rune-aware string operations.
//!
//! Every position here is a *rune index* (a count of `char`s), never a
//! byte offset. This is the one invariant the whole widget kit leans on:
//! cursor math, substring slicing, and display width all go through this
//! module so nothing ever indexes a `String` by byte and lands mid-UTF-8.

use unicode_width::UnicodeWidthChar;

/// Number of bytes (1..=4) a UTF-8 sequence starting with `first_byte`
/// occupies, from the high-bit pattern. The decoder's own copy
/// (`ftui_core::input_parser::char_length`) is the load-bearing one; this
/// is kept here too since `ftui-text` has no dependency on `ftui-core`.
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

/// Count of runes (Unicode code points) in `s`.
#[must_use]
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// Decode `s` into its sequence of code points.
#[must_use]
pub fn decode(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}

/// Re-encode a sequence of code points into a `String`. Invalid code
/// points are replaced with U+FFFD, matching `char::from_u32`'s failure
/// mode rather than panicking or truncating output.
#[must_use]
pub fn encode(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|&cp| char::from_u32(cp).unwrap_or('\u{FFFD}'))
        .collect()
}

/// Byte offset of rune index `i` in `s` (or `s.len()` if `i >= length(s)`).
fn byte_offset(s: &str, i: usize) -> usize {
    s.char_indices()
        .nth(i)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Slice `s` to `n` runes starting at rune index `start`. Out-of-range
/// bounds are clamped rather than treated as an error (see spec's
/// `OutOfBounds` handling).
#[must_use]
pub fn substring(s: &str, start: usize, n: usize) -> String {
    let start_b = byte_offset(s, start);
    let end_b = byte_offset(s, start.saturating_add(n));
    s.get(start_b..end_b).unwrap_or("").to_string()
}

/// Insert `t` into `s` at rune position `pos`. `pos` is clamped to
/// `length(s)`.
#[must_use]
pub fn insert(s: &str, pos: usize, t: &str) -> String {
    let pos = pos.min(length(s));
    let b = byte_offset(s, pos);
    let mut out = String::with_capacity(s.len() + t.len());
    out.push_str(&s[..b]);
    out.push_str(t);
    out.push_str(&s[b..]);
    out
}

/// Remove `n` runes from `s` starting at rune position `pos`. Clamped to
/// the string's bounds; removing past the end is a no-op for the excess.
#[must_use]
pub fn erase(s: &str, pos: usize, n: usize) -> String {
    let len = length(s);
    let pos = pos.min(len);
    let end = pos.saturating_add(n).min(len);
    let start_b = byte_offset(s, pos);
    let end_b = byte_offset(s, end);
    let mut out = String::with_capacity(s.len() - (end_b - start_b));
    out.push_str(&s[..start_b]);
    out.push_str(&s[end_b..]);
    out
}

/// Monospaced cell width of `s`: the authoritative measure for cursor
/// placement. ASCII and ordinary runes count 1, East-Asian Wide/Fullwidth
/// and common emoji count 2, combining marks and zero-width joiners count
/// 0.
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| char_width(c)).sum()
}

/// Per-rune cell width; see [`display_width`].
#[must_use]
pub fn char_width(c: char) -> usize {
    if c == '\u{200D}' {
        return 0; // zero-width joiner
    }
    UnicodeWidthChar::width(c).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_runes_not_bytes() {
        assert_eq!(length("日語"), 2);
        assert_eq!("日語".len(), 6);
    }

    #[test]
    fn insert_and_erase_roundtrip() {
        let s = "日語";
        let inserted = insert(s, 1, "本");
        assert_eq!(inserted, "日本語");
        let erased = erase(&inserted, 1, 1);
        assert_eq!(erased, s);
    }

    #[test]
    fn display_width_mixes_narrow_and_wide() {
        assert_eq!(display_width("A日B"), 4);
    }

    #[test]
    fn substring_clamps_out_of_range() {
        assert_eq!(substring("abc", 1, 100), "bc");
        assert_eq!(substring("abc", 100, 5), "");
    }

    #[test]
    fn encode_decode_roundtrip() {
        let s = "hello, 世界! 👋";
        assert_eq!(encode(&decode(s)), s);
    }

    #[test]
    fn zero_width_joiner_has_no_width() {
        assert_eq!(char_width('\u{200D}'), 0);
    }

    proptest::proptest! {
        #[test]
        fn encode_decode_is_identity(s in "\\PC*") {
            proptest::prop_assert_eq!(encode(&decode(&s)), s);
        }

        #[test]
        fn insert_then_erase_is_identity(s in "[a-zA-Z0-9]{0,12}", i in 0usize..12, t in "[a-zA-Z0-9]{0,6}") {
            let i = i.min(length(&s));
            let inserted = insert(&s, i, &t);
            proptest::prop_assert_eq!(length(&inserted), length(&s) + length(&t));
            proptest::prop_assert_eq!(erase(&inserted, i, length(&t)), s);
        }
    }
}
