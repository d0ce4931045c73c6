//! A directory/file browser prompt.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use ftui_core::{KeyEvent, KeyKind};
use ftui_runtime::{Cmd, Model, Msg, Program, ProgramConfig};
use ftui_style::Style;

struct Entry {
    name: String,
    is_dir: bool,
}

/// State for a [`FilePicker`].
pub struct FilePickerModel {
    cwd: PathBuf,
    entries: Vec<Entry>,
    cursor: usize,
    show_hidden: bool,
    extensions: Option<Vec<String>>,
    file_allowed: Option<Rc<dyn Fn(&Path) -> bool>>,
    dir_allowed: Option<Rc<dyn Fn(&Path) -> bool>>,
    pub selected: Option<PathBuf>,
    pub submitted: bool,
    pub cancelled: bool,
}

impl Model for FilePickerModel {
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
        let mut out = format!("{}", self.cwd.display());
        for (i, entry) in self.entries.iter().enumerate() {
            out.push('\n');
            let marker = if entry.is_dir { "/" } else { "" };
            let line = format!("{}{marker}", entry.name);
            if i == self.cursor {
                out.push_str(&Style::new().reversed().paint(&format!("> {line}")));
            } else {
                out.push_str(&format!("  {line}"));
            }
        }
        out
    }

    fn should_quit(&self) -> bool {
        self.submitted || self.cancelled
    }
}

impl FilePickerModel {
    fn reload(&mut self) {
        let mut entries = Vec::new();
        let Ok(read) = std::fs::read_dir(&self.cwd) else {
            self.entries = entries;
            self.cursor = 0;
            return;
        };
        for item in read.flatten() {
            let path = item.path();
            let name = item.file_name().to_string_lossy().into_owned();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }
            let is_dir = path.is_dir();
            if is_dir {
                if self.dir_allowed.as_ref().is_some_and(|f| !f(&path)) {
                    continue;
                }
            } else {
                if let Some(exts) = &self.extensions {
                    let matches_ext = path
                        .extension()
                        .map(|e| e.to_string_lossy().to_lowercase())
                        .is_some_and(|e| exts.iter().any(|want| want.to_lowercase() == e));
                    if !matches_ext {
                        continue;
                    }
                }
                if self.file_allowed.as_ref().is_some_and(|f| !f(&path)) {
                    continue;
                }
            }
            entries.push(Entry { name, is_dir });
        }
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then(a.name.cmp(&b.name)));
        self.entries = entries;
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
    }

    fn handle_key(&mut self, k: KeyEvent) {
        if k.is_ctrl_c() {
            self.cancelled = true;
            return;
        }
        match k.key {
            KeyKind::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyKind::Down => {
                self.cursor = (self.cursor + 1).min(self.entries.len().saturating_sub(1));
            }
            KeyKind::Rune if k.rune == u32::from('.') => {
                self.show_hidden = !self.show_hidden;
                self.reload();
            }
            KeyKind::Enter => self.activate(),
            KeyKind::Backspace => {
                if let Some(parent) = self.cwd.parent() {
                    self.cwd = parent.to_path_buf();
                    self.reload();
                }
            }
            KeyKind::Escape => self.cancelled = true,
            _ => {}
        }
    }

    fn activate(&mut self) {
        let Some(entry) = self.entries.get(self.cursor) else {
            return;
        };
        let path = self.cwd.join(&entry.name);
        if entry.is_dir {
            self.cwd = path;
            self.reload();
        } else {
            self.selected = Some(path);
            self.submitted = true;
        }
    }
}

/// Builder for a [`FilePickerModel`].
#[derive(Default)]
pub struct FilePicker {
    start_dir: PathBuf,
    show_hidden: bool,
    extensions: Option<Vec<String>>,
    file_allowed: Option<Rc<dyn Fn(&Path) -> bool>>,
    dir_allowed: Option<Rc<dyn Fn(&Path) -> bool>>,
}

impl FilePicker {
    #[must_use]
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn show_hidden(mut self, enabled: bool) -> Self {
        self.show_hidden = enabled;
        self
    }

    #[must_use]
    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.extensions = Some(exts);
        self
    }

    #[must_use]
    pub fn file_allowed(mut self, f: impl Fn(&Path) -> bool + 'static) -> Self {
        self.file_allowed = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn dir_allowed(mut self, f: impl Fn(&Path) -> bool + 'static) -> Self {
        self.dir_allowed = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn run(self) -> Option<PathBuf> {
        let mut model = FilePickerModel {
            cwd: self.start_dir,
            entries: Vec::new(),
            cursor: 0,
            show_hidden: self.show_hidden,
            extensions: self.extensions,
            file_allowed: self.file_allowed,
            dir_allowed: self.dir_allowed,
            selected: None,
            submitted: false,
            cancelled: false,
        };
        model.reload();
        match Program::new(model, ProgramConfig::new()).run() {
            Ok(m) if m.submitted => m.selected,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ftui-widgets-file-picker-test-{:?}",
            std::thread::current().id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("a.txt"), b"x").unwrap();
        fs::write(dir.join("b.log"), b"x").unwrap();
        fs::write(dir.join(".hidden"), b"x").unwrap();
        dir
    }

    #[test]
    fn hidden_entries_excluded_by_default() {
        let dir = scratch_dir();
        let mut model = FilePickerModel {
            cwd: dir,
            entries: Vec::new(),
            cursor: 0,
            show_hidden: false,
            extensions: None,
            file_allowed: None,
            dir_allowed: None,
            selected: None,
            submitted: false,
            cancelled: false,
        };
        model.reload();
        assert!(!model.entries.iter().any(|e| e.name == ".hidden"));
    }

    #[test]
    fn dot_toggles_hidden_visibility() {
        let dir = scratch_dir();
        let mut model = FilePickerModel {
            cwd: dir,
            entries: Vec::new(),
            cursor: 0,
            show_hidden: false,
            extensions: None,
            file_allowed: None,
            dir_allowed: None,
            selected: None,
            submitted: false,
            cancelled: false,
        };
        model.reload();
        let (model, _) = model.update(Msg::Key(KeyEvent::rune(u32::from('.'))));
        assert!(model.entries.iter().any(|e| e.name == ".hidden"));
    }

    #[test]
    fn extension_filter_hides_non_matching_files() {
        let dir = scratch_dir();
        let mut model = FilePickerModel {
            cwd: dir,
            entries: Vec::new(),
            cursor: 0,
            show_hidden: false,
            extensions: Some(vec!["txt".to_string()]),
            file_allowed: None,
            dir_allowed: None,
            selected: None,
            submitted: false,
            cancelled: false,
        };
        model.reload();
        assert!(model.entries.iter().any(|e| e.name == "a.txt"));
        assert!(!model.entries.iter().any(|e| e.name == "b.log"));
    }

    #[test]
    fn directories_sort_before_files() {
        let dir = scratch_dir();
        let mut model = FilePickerModel {
            cwd: dir,
            entries: Vec::new(),
            cursor: 0,
            show_hidden: false,
            extensions: None,
            file_allowed: None,
            dir_allowed: None,
            selected: None,
            submitted: false,
            cancelled: false,
        };
        model.reload();
        assert!(model.entries[0].is_dir);
    }
}
