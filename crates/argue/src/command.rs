//! The command builder and parser entry point.

use crate::arg::Arg;
use crate::error::ArgError;
use crate::matches::Matches;

/// A command: a name, optional version/about text, and a set of declared
/// [`Arg`]s. Kept deliberately flat — no subcommand tree, matching the
/// scope this crate was pared down to.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    version: Option<String>,
    about: Option<String>,
    args: Vec<Arg>,
}

impl Command {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            about: None,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn version(mut self, v: impl Into<String>) -> Self {
        self.version = Some(v.into());
        self
    }

    #[must_use]
    pub fn about(mut self, a: impl Into<String>) -> Self {
        self.about = Some(a.into());
        self
    }

    #[must_use]
    pub fn arg(mut self, arg: Arg) -> Self {
        self.args.push(arg);
        self
    }

    /// Render the `--help` text: usage line, then one row per argument.
    #[must_use]
    pub fn render_help(&self) -> String {
        let mut out = String::new();
        if let Some(about) = &self.about {
            out.push_str(about);
            out.push_str("\n\n");
        }
        out.push_str(&format!("Usage: {} [OPTIONS]", self.name));
        for a in &self.args {
            if a.positional {
                out.push_str(&format!(
                    " {}",
                    if a.required { a.name.clone() } else { format!("[{}]", a.name) }
                ));
            }
        }
        out.push_str("\n\nArguments:\n");
        for a in &self.args {
            let flags = a.display_flags();
            let help = a.help.as_deref().unwrap_or("");
            out.push_str(&format!("  {flags:<20} {help}\n"));
        }
        out
    }

    fn render_version(&self) -> String {
        format!("{} {}", self.name, self.version.as_deref().unwrap_or("0.0.0"))
    }

    fn find_long<'a>(&'a self, name: &str) -> Option<&'a Arg> {
        self.args.iter().find(|a| a.long.as_deref() == Some(name))
    }

    fn find_short<'a>(&'a self, c: char) -> Option<&'a Arg> {
        self.args.iter().find(|a| a.short == Some(c))
    }

    /// Parse `args` (the command-line tokens, excluding the program
    /// name) into [`Matches`].
    ///
    /// # Errors
    /// Returns [`ArgError::Help`]/[`ArgError::Version`] for `-h`/`--help`
    /// and `--version`, or a usage error for anything malformed or
    /// missing.
    pub fn parse(&self, args: &[String]) -> Result<Matches, ArgError> {
        let mut matches = Matches::default();
        let mut positionals = self.args.iter().filter(|a| a.positional);
        let mut current_positional: Option<&Arg> = positionals.next();

        let mut iter = args.iter();
        while let Some(token) = iter.next() {
            if token == "-h" || token == "--help" {
                return Err(ArgError::Help(self.render_help()));
            }
            if token == "--version" {
                return Err(ArgError::Version(self.render_version()));
            }

            if let Some(rest) = token.strip_prefix("--") {
                let (name, inline_value) = match rest.split_once('=') {
                    Some((n, v)) => (n, Some(v.to_string())),
                    None => (rest, None),
                };
                let arg = self
                    .find_long(name)
                    .ok_or_else(|| ArgError::Unknown(token.clone()))?;
                Self::consume_named(arg, inline_value, &mut iter, &mut matches)?;
            } else if let Some(rest) = token.strip_prefix('-') {
                if rest.is_empty() {
                    return Err(ArgError::Unknown(token.clone()));
                }
                let c = rest.chars().next().unwrap();
                let arg = self
                    .find_short(c)
                    .ok_or_else(|| ArgError::Unknown(token.clone()))?;
                let inline_value = if rest.len() > 1 {
                    Some(rest[c.len_utf8()..].to_string())
                } else {
                    None
                };
                Self::consume_named(arg, inline_value, &mut iter, &mut matches)?;
            } else if let Some(arg) = current_positional {
                Self::push_value(&mut matches, arg, token.clone())?;
                if !arg.multiple {
                    current_positional = positionals.next();
                }
            } else {
                return Err(ArgError::UnexpectedPositional(token.clone()));
            }
        }

        for arg in &self.args {
            if matches.values.contains_key(&arg.name) || matches.flags.contains_key(&arg.name) {
                continue;
            }
            if let Some(default) = &arg.default_value {
                Self::push_value(&mut matches, arg, default.clone())?;
            } else if arg.required {
                return Err(ArgError::MissingRequired(arg.name.clone()));
            } else if !arg.takes_value {
                matches.flags.insert(arg.name.clone(), false);
            }
        }

        Ok(matches)
    }

    fn consume_named<'a>(
        arg: &Arg,
        inline_value: Option<String>,
        iter: &mut impl Iterator<Item = &'a String>,
        matches: &mut Matches,
    ) -> Result<(), ArgError> {
        if !arg.takes_value {
            matches.flags.insert(arg.name.clone(), true);
            return Ok(());
        }
        let value = match inline_value {
            Some(v) => v,
            None => iter
                .next()
                .cloned()
                .ok_or_else(|| ArgError::MissingValue(arg.display_flags()))?,
        };
        Self::push_value(matches, arg, value)
    }

    fn push_value(matches: &mut Matches, arg: &Arg, value: String) -> Result<(), ArgError> {
        if let Some(validator) = &arg.validator {
            validator(&value).map_err(|reason| ArgError::InvalidValue {
                name: arg.name.clone(),
                reason,
            })?;
        }
        matches.values.entry(arg.name.clone()).or_default().push(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Command {
        Command::new("greet")
            .version("1.0.0")
            .about("Greets someone")
            .arg(Arg::new("name").positional().required())
            .arg(
                Arg::new("count")
                    .short('c')
                    .long("count")
                    .takes_value()
                    .default_value("1"),
            )
            .arg(Arg::new("verbose").short('v').long("verbose"))
            .arg(Arg::new("files").short('f').long("file").multiple())
    }

    fn v(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positional_and_flag_and_option() {
        let m = sample().parse(&v(&["alice", "-v", "--count", "3"])).unwrap();
        assert_eq!(m.get_str("name"), Some("alice"));
        assert!(m.get_flag("verbose"));
        assert_eq!(m.get_str("count"), Some("3"));
    }

    #[test]
    fn default_value_used_when_absent() {
        let m = sample().parse(&v(&["alice"])).unwrap();
        assert_eq!(m.get_str("count"), Some("1"));
    }

    #[test]
    fn missing_required_positional_errors() {
        let err = sample().parse(&v(&["-v"])).unwrap_err();
        assert_eq!(err, ArgError::MissingRequired("name".to_string()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn help_flag_short_circuits_with_exit_code_zero() {
        let err = sample().parse(&v(&["--help"])).unwrap_err();
        assert!(matches!(err, ArgError::Help(_)));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = sample().parse(&v(&["--version"])).unwrap_err();
        match err {
            ArgError::Version(msg) => assert!(msg.contains("1.0.0")),
            _ => panic!("expected Version"),
        }
    }

    #[test]
    fn unknown_long_flag_errors() {
        let err = sample().parse(&v(&["alice", "--bogus"])).unwrap_err();
        assert_eq!(err, ArgError::Unknown("--bogus".to_string()));
    }

    #[test]
    fn multiple_named_values_accumulate() {
        let m = sample()
            .parse(&v(&["alice", "-f", "a.txt", "-f", "b.txt"]))
            .unwrap();
        assert_eq!(m.get_many("files"), &["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn option_missing_its_value_errors() {
        let err = sample().parse(&v(&["alice", "--count"])).unwrap_err();
        assert!(matches!(err, ArgError::MissingValue(_)));
    }

    #[test]
    fn validator_rejects_bad_values() {
        let cmd = Command::new("t").arg(
            Arg::new("port")
                .long("port")
                .takes_value()
                .validator(|v| {
                    v.parse::<u16>()
                        .map(|_| ())
                        .map_err(|_| "not a valid port".to_string())
                }),
        );
        let err = cmd.parse(&v(&["--port", "notanumber"])).unwrap_err();
        assert!(matches!(err, ArgError::InvalidValue { .. }));
    }

    #[test]
    fn equals_syntax_supplies_inline_value() {
        let m = sample().parse(&v(&["alice", "--count=7"])).unwrap();
        assert_eq!(m.get_str("count"), Some("7"));
    }
}
