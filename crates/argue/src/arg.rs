//! A single argument declaration.

use std::rc::Rc;

/// A validator run against a raw value before it's accepted. Returning
/// `Err` rejects the value with the given reason.
pub type Validator = Rc<dyn Fn(&str) -> Result<(), String>>;

/// One declared argument: a named flag/option, or a positional.
#[derive(Clone)]
pub struct Arg {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) value_name: Option<String>,
    pub(crate) takes_value: bool,
    pub(crate) required: bool,
    pub(crate) positional: bool,
    pub(crate) multiple: bool,
    pub(crate) default_value: Option<String>,
    pub(crate) validator: Option<Validator>,
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arg")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("long", &self.long)
            .field("takes_value", &self.takes_value)
            .field("required", &self.required)
            .field("positional", &self.positional)
            .field("multiple", &self.multiple)
            .finish_non_exhaustive()
    }
}

impl Arg {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            long: None,
            help: None,
            value_name: None,
            takes_value: false,
            required: false,
            positional: false,
            multiple: false,
            default_value: None,
            validator: None,
        }
    }

    #[must_use]
    pub const fn short(mut self, c: char) -> Self {
        self.short = Some(c);
        self
    }

    #[must_use]
    pub fn long(mut self, s: impl Into<String>) -> Self {
        self.long = Some(s.into());
        self
    }

    #[must_use]
    pub fn help(mut self, s: impl Into<String>) -> Self {
        self.help = Some(s.into());
        self
    }

    #[must_use]
    pub fn value_name(mut self, s: impl Into<String>) -> Self {
        self.value_name = Some(s.into());
        self
    }

    #[must_use]
    pub const fn takes_value(mut self) -> Self {
        self.takes_value = true;
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks this argument as positional: matched by position rather than
    /// by `-x`/`--name`, implicitly takes a value.
    #[must_use]
    pub const fn positional(mut self) -> Self {
        self.positional = true;
        self.takes_value = true;
        self
    }

    /// Accepts repeated occurrences (named) or absorbs every remaining
    /// bare token (positional), collected in [`crate::Matches::get_many`].
    #[must_use]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self.takes_value = true;
        self
    }

    #[must_use]
    pub fn default_value(mut self, s: impl Into<String>) -> Self {
        self.default_value = Some(s.into());
        self
    }

    #[must_use]
    pub fn validator(mut self, f: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.validator = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn display_flags(&self) -> String {
        let mut parts = Vec::new();
        if let Some(s) = self.short {
            parts.push(format!("-{s}"));
        }
        if let Some(l) = &self.long {
            parts.push(format!("--{l}"));
        }
        if parts.is_empty() {
            self.name.clone()
        } else {
            parts.join(", ")
        }
    }
}
