#![forbid(unsafe_code)]

//! Rune-aware UTF-8 string operations and fuzzy matching.
//!
//! Shared by the widget kit: [`utf8`] backs cursor math and text editing
//! (`TextInput`, `TextArea`, `Viewport`/`Pager` word wrap), [`fuzzy`]
//! backs `Filter`'s incremental search.

pub mod fuzzy;
pub mod utf8;

pub use fuzzy::{filter, fuzzy_match, MatchResult};
pub use utf8::{char_length, decode, display_width, encode, erase, insert, length, substring};
