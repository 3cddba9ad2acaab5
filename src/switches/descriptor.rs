//! Descriptor types for individual switches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many values a switch consumes from the arguments that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// No value; presence alone is the signal.
    Binary,
    /// Exactly one following plain argument.
    Single,
    /// One or more consecutive following plain arguments.
    List,
}

impl Arity {
    pub fn takes_value(self) -> bool {
        match self {
            Arity::Binary => false,
            Arity::Single | Arity::List => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Arity::Binary => "binary",
            Arity::Single => "single",
            Arity::List => "list",
        };
        f.write_str(name)
    }
}

/// Identity of a switch: the position of its descriptor inside the [`Registry`].
///
/// [`Registry`]: super::Registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SwitchId(pub(crate) usize);

impl SwitchId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of the caller's switch table.
///
/// Descriptors are plain data. Setting values is the job of a
/// [`Switchboard`](crate::dispatch::Switchboard) setter, or of the caller reading a
/// [`Resolved`](crate::parser::Resolved) result directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchDescriptor {
    /// E.g. `'a'` for `-a`.
    #[serde(default)]
    pub short: Option<char>,
    /// E.g. `"all-that"` for `--all-that`.
    #[serde(default)]
    pub long: Option<String>,
    pub arity: Arity,
    /// Free text carried along for listings; never parsed.
    #[serde(default)]
    pub description: Option<String>,
}

impl SwitchDescriptor {
    pub fn new(arity: Arity) -> Self {
        Self {
            short: None,
            long: None,
            arity,
            description: None,
        }
    }

    pub fn binary() -> Self {
        Self::new(Arity::Binary)
    }

    pub fn single() -> Self {
        Self::new(Arity::Single)
    }

    pub fn list() -> Self {
        Self::new(Arity::List)
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The spelling used when talking about this switch: the long form when there is one.
    pub fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

impl fmt::Display for SwitchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short, &self.long) {
            (Some(short), Some(long)) => write!(f, "-{short}, --{long}")?,
            (Some(short), None) => write!(f, "-{short}")?,
            (None, Some(long)) => write!(f, "--{long}")?,
            (None, None) => f.write_str("<unnamed>")?,
        }
        write!(f, " ({})", self.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_names() {
        let d = SwitchDescriptor::list()
            .with_short('a')
            .with_long("all-that")
            .with_description("Desc 1");
        assert_eq!(d.short, Some('a'));
        assert_eq!(d.long.as_deref(), Some("all-that"));
        assert_eq!(d.arity, Arity::List);
        assert_eq!(d.description.as_deref(), Some("Desc 1"));
    }

    #[test]
    fn test_display_name_prefers_long() {
        assert_eq!(
            SwitchDescriptor::binary()
                .with_short('a')
                .with_long("all-that")
                .display_name(),
            "--all-that"
        );
        assert_eq!(SwitchDescriptor::binary().with_short('b').display_name(), "-b");
    }

    #[test]
    fn test_display() {
        let d = SwitchDescriptor::single().with_short('c').with_long("capla");
        assert_eq!(d.to_string(), "-c, --capla (single)");
    }

    #[test]
    fn test_arity_takes_value() {
        assert!(!Arity::Binary.takes_value());
        assert!(Arity::Single.takes_value());
        assert!(Arity::List.takes_value());
    }
}
