#![forbid(unsafe_code)]
//! Public facade over the ftui crates.
//!
//! # Role
//! This crate is the entry point application code depends on; it
//! re-exports the commonly used types from `ftui-core`, `ftui-render`,
//! `ftui-style`, `ftui-text`, and (with the `runtime` feature, on by
//! default) `ftui-runtime`/`ftui-widgets`, so a widget or a full program
//! can be built from a single dependency.
//!
//! # How it fits together
//! - Terminal I/O and key decoding: `ftui-core`
//! - Rune-aware strings and fuzzy matching: `ftui-text`
//! - The live-region renderer: `ftui-render`
//! - Colors and SGR styling: `ftui-style`
//! - The Model/Update/View loop: `ftui-runtime` (feature `runtime`)
//! - Confirm/TextInput/List/... widgets: `ftui-widgets` (feature `runtime`)

pub use ftui_core::error::{Error, Result};
pub use ftui_core::event::{KeyEvent, KeyKind};
pub use ftui_core::input_parser::InputParser;
pub use ftui_core::terminal;

pub use ftui_render::LiveRegion;

pub use ftui_style::{Color, Style};

pub use ftui_text::{filter, fuzzy_match, MatchResult};
pub use ftui_text::utf8::{
    char_length, decode, display_width, encode, erase, insert, length, substring,
};

#[cfg(feature = "runtime")]
pub use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig, Scheduler};

#[cfg(feature = "runtime")]
pub use ftui_widgets::{
    BorderStyle, Confirm, ConfirmModel, FilePicker, FilePickerModel, Filter, FilterModel, List,
    ListModel, Pager, PagerModel, Spinner, SpinnerStyle, Table, TableModel, TextArea,
    TextAreaModel, TextInput, TextInputModel, ViewportModel,
};

pub use ftui_core as core;
pub use ftui_render as render;
#[cfg(feature = "runtime")]
pub use ftui_runtime as runtime;
pub use ftui_style as style;
pub use ftui_text as text;
#[cfg(feature = "runtime")]
pub use ftui_widgets as widgets;

/// Commonly imported names for day-to-day widget/program authoring.
pub mod prelude {
    pub use crate::{Color, KeyEvent, KeyKind, Style};

    #[cfg(feature = "runtime")]
    pub use crate::{Cmd, Model, Msg, Program, ProgramConfig};

    #[cfg(feature = "runtime")]
    pub use crate::{Confirm, FilePicker, Filter, List, Pager, Spinner, Table, TextArea, TextInput};
}
