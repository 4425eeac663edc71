//! Command flag parsing
//!
//! Commands take `--name value` and `--name` (switch) tokens. Flags are not
//! checked against an allow-list here: unknown flags are kept and each
//! command decides which ones it reads and how they are validated.

use indexmap::IndexMap;

use crate::errors::{KapsoError, Result};

/// How a flag was given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// `--name` with no value following it
    Switch,
    /// `--name value`
    Value(String),
}

/// Result of looking a flag up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag<'a> {
    Absent,
    Present,
    Value(&'a str),
}

impl<'a> Flag<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Flag::Absent)
    }

    /// The flag's value, if it was given one
    pub fn value(&self) -> Option<&'a str> {
        match *self {
            Flag::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Parsed flags, in the order they first appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    entries: IndexMap<String, FlagValue>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Flag<'_> {
        match self.entries.get(name) {
            None => Flag::Absent,
            Some(FlagValue::Switch) => Flag::Present,
            Some(FlagValue::Value(v)) => Flag::Value(v.as_str()),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FlagValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Parse `--name [value]` tokens into [`Flags`].
///
/// A token starting with `--` names a flag. If the next token exists and does
/// not itself start with `--`, it is consumed as the value; otherwise the flag
/// is a switch. Stray positional tokens are ignored and a repeated flag keeps
/// its last value.
pub fn parse_flags<S: AsRef<str>>(argv: &[S]) -> Flags {
    let mut flags = Flags::new();
    let mut i = 0;

    while i < argv.len() {
        let token: &str = argv[i].as_ref();
        i += 1;

        let Some(name) = token.strip_prefix("--") else {
            continue;
        };

        let next: Option<&str> = argv.get(i).map(|s| s.as_ref());
        match next {
            Some(next) if !next.starts_with("--") => {
                flags.insert(name, FlagValue::Value(next.to_string()));
                i += 1;
            }
            _ => flags.insert(name, FlagValue::Switch),
        }
    }

    flags
}

/// True if `--help` or `-h` appears anywhere in `argv`
pub fn has_help_flag<S: AsRef<str>>(argv: &[S]) -> bool {
    argv.iter()
        .map(AsRef::<str>::as_ref)
        .any(|a| a == "--help" || a == "-h")
}

/// Value of a flag that must be given with a value.
///
/// A bare switch counts as missing: `--message-id` with nothing after it
/// cannot identify anything.
pub fn require_flag<'a>(flags: &'a Flags, name: &str) -> Result<&'a str> {
    flags
        .get(name)
        .value()
        .ok_or_else(|| KapsoError::usage(format!("Missing required flag --{}", name)))
}
