#![forbid(unsafe_code)]
//! The reusable interactive widget kit: ten small Elm-style components
//! built on `ftui-runtime`, `ftui-render`, `ftui-style`, and `ftui-text`.

pub mod confirm;
pub mod file_picker;
pub mod filter;
pub mod list;
pub mod pager;
pub mod spinner;
pub mod table;
pub mod text_area;
pub mod text_input;
pub mod viewport;

pub use confirm::{Confirm, ConfirmModel};
pub use file_picker::{FilePicker, FilePickerModel};
pub use filter::{Filter, FilterModel};
pub use list::{List, ListModel};
pub use pager::{Pager, PagerModel};
pub use spinner::{Spinner, SpinnerStyle};
pub use table::{BorderStyle, Table, TableModel};
pub use text_area::{TextArea, TextAreaModel};
pub use text_input::{TextInput, TextInputModel};
pub use viewport::ViewportModel;
