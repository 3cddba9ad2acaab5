//! Classified argument tokens
//!
//! A [`ClassifiedToken`] is what the tokenizer emits for each raw argument: what kind of
//! argument it is, which switches it spelled, and the argument text as given.

use serde::Serialize;
use std::fmt;

use crate::switches::{Arity, SwitchId};

/// What a raw argument turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgKind {
    /// Zero or more binary switches and nothing else
    BinarySwitch,
    /// Exactly one single-value switch, possibly clustered with binary switches
    SingleValueSwitch,
    /// Exactly one list switch, possibly clustered with binary switches
    ListValueSwitch,
    /// Not a switch: data for a preceding value-bearing switch
    PlainValue,
}

impl ArgKind {
    /// The kind of a switch token, decided by its value-bearing member if it has one
    pub fn of(matched: &[MatchedSwitch]) -> Self {
        matched
            .iter()
            .map(|m| m.arity)
            .find(|arity| arity.takes_value())
            .map(ArgKind::from)
            .unwrap_or(ArgKind::BinarySwitch)
    }

    pub fn is_switch(self) -> bool {
        !matches!(self, ArgKind::PlainValue)
    }

    /// Short description used as a grammar label in error messages
    pub fn label(self) -> &'static str {
        match self {
            ArgKind::BinarySwitch => "a binary switch",
            ArgKind::SingleValueSwitch => "a single-value switch",
            ArgKind::ListValueSwitch => "a list switch",
            ArgKind::PlainValue => "a value",
        }
    }
}

impl From<Arity> for ArgKind {
    fn from(arity: Arity) -> Self {
        match arity {
            Arity::Binary => ArgKind::BinarySwitch,
            Arity::Single => ArgKind::SingleValueSwitch,
            Arity::List => ArgKind::ListValueSwitch,
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::BinarySwitch => "binary-switch",
            ArgKind::SingleValueSwitch => "single-value-switch",
            ArgKind::ListValueSwitch => "list-value-switch",
            ArgKind::PlainValue => "plain-value",
        };
        f.write_str(name)
    }
}

/// A switch recognised inside an argument, with the arity it was registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MatchedSwitch {
    pub id: SwitchId,
    pub arity: Arity,
}

/// One raw argument after classification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedToken {
    pub kind: ArgKind,
    /// Matched switches in the order they were written; empty for plain values
    pub matched: Vec<MatchedSwitch>,
    /// The argument exactly as given
    pub raw: String,
}

impl ClassifiedToken {
    pub fn switch(matched: Vec<MatchedSwitch>, raw: impl Into<String>) -> Self {
        Self {
            kind: ArgKind::of(&matched),
            matched,
            raw: raw.into(),
        }
    }

    pub fn plain(raw: impl Into<String>) -> Self {
        Self {
            kind: ArgKind::PlainValue,
            matched: Vec::new(),
            raw: raw.into(),
        }
    }
}

impl fmt::Display for ClassifiedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.raw)?;
        if self.kind.is_switch() {
            let ids: Vec<String> = self.matched.iter().map(|m| m.id.to_string()).collect();
            write!(f, " [{}]", ids.join(" "))?;
        }
        Ok(())
    }
}
