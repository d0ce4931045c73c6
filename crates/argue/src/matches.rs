//! The result of a successful [`crate::Command::parse`].

use std::collections::HashMap;

/// Typed accessors over a successful parse.
#[derive(Debug, Clone, Default)]
pub struct Matches {
    pub(crate) values: HashMap<String, Vec<String>>,
    pub(crate) flags: HashMap<String, bool>,
}

impl Matches {
    /// The first value bound to `name`, if any (including a default).
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Every value bound to `name`, in the order they were given.
    #[must_use]
    pub fn get_many(&self, name: &str) -> &[String] {
        self.values.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether flag `name` was present on the command line.
    #[must_use]
    pub fn get_flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Whether `name` has any bound value at all (present or defaulted).
    #[must_use]
    pub fn is_present(&self, name: &str) -> bool {
        self.values.contains_key(name) || self.get_flag(name)
    }
}
