//! The validated switch table.
//!
//! A [`Registry`] is built once from the caller's descriptors and never changes afterwards.
//! Construction rejects tables whose matching behavior would be ambiguous: switches with no
//! name, repeated short or long names, and names the switch grammar cannot spell.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

use super::descriptor::{SwitchDescriptor, SwitchId};

/// Characters that introduce a short cluster and therefore cannot name a switch.
pub const SHORT_PREFIXES: [char; 2] = ['-', '/'];

static LONG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("long name pattern"));

/// Configuration errors found while building a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("switch #{index} has neither a short nor a long name")]
    Unnamed { index: usize },

    #[error("short name '-{short}' is used by switch #{first} and switch #{second}")]
    DuplicateShort {
        short: char,
        first: usize,
        second: usize,
    },

    #[error("long name '--{long}' is used by switch #{first} and switch #{second}")]
    DuplicateLong {
        long: String,
        first: usize,
        second: usize,
    },

    #[error("switch #{index} has short name {short:?}, which is not a printable ASCII character other than '-' or '/'")]
    InvalidShort { index: usize, short: char },

    #[error("switch #{index} has long name {long:?}, which must start with a letter or digit and contain only letters, digits, '_', '.' or '-'")]
    InvalidLong { index: usize, long: String },
}

/// Immutable, validated table of switch descriptors.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    switches: Vec<SwitchDescriptor>,
    shorts: HashMap<char, SwitchId>,
    longs: HashMap<String, SwitchId>,
}

impl Registry {
    pub fn new(switches: impl IntoIterator<Item = SwitchDescriptor>) -> Result<Self, RegistryError> {
        let switches: Vec<SwitchDescriptor> = switches.into_iter().collect();
        let mut shorts = HashMap::new();
        let mut longs: HashMap<String, SwitchId> = HashMap::new();

        for (index, switch) in switches.iter().enumerate() {
            let id = SwitchId(index);
            if switch.short.is_none() && switch.long.is_none() {
                return Err(RegistryError::Unnamed { index });
            }

            if let Some(short) = switch.short {
                if !short.is_ascii_graphic() || SHORT_PREFIXES.contains(&short) {
                    return Err(RegistryError::InvalidShort { index, short });
                }
                if let Some(first) = shorts.insert(short, id) {
                    return Err(RegistryError::DuplicateShort {
                        short,
                        first: first.index(),
                        second: index,
                    });
                }
            }

            if let Some(long) = &switch.long {
                if !LONG_NAME.is_match(long) {
                    return Err(RegistryError::InvalidLong {
                        index,
                        long: long.clone(),
                    });
                }
                if let Some(first) = longs.insert(long.clone(), id) {
                    return Err(RegistryError::DuplicateLong {
                        long: long.clone(),
                        first: first.index(),
                        second: index,
                    });
                }
            }
        }

        Ok(Self {
            switches,
            shorts,
            longs,
        })
    }

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Returns the descriptor for `id`, or `None` if the id belongs to another registry.
    pub fn get(&self, id: SwitchId) -> Option<&SwitchDescriptor> {
        self.switches.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SwitchId, &SwitchDescriptor)> + '_ {
        self.switches
            .iter()
            .enumerate()
            .map(|(index, switch)| (SwitchId(index), switch))
    }

    pub fn find_short(&self, short: char) -> Option<SwitchId> {
        self.shorts.get(&short).copied()
    }

    pub fn find_long(&self, long: &str) -> Option<SwitchId> {
        self.longs.get(long).copied()
    }

    /// Look a switch up by how a user would write it: `--long`, `-s`, a bare long name or a
    /// bare short character. Bare names try the long table first.
    pub fn lookup(&self, name: &str) -> Option<SwitchId> {
        if let Some(long) = name.strip_prefix("--") {
            return self.find_long(long);
        }
        if let Some(short) = name.strip_prefix('-') {
            return single_char(short).and_then(|c| self.find_short(c));
        }
        self.find_long(name)
            .or_else(|| single_char(name).and_then(|c| self.find_short(c)))
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
