//! Errors raised by the switch grammar.
//!
//! [`ParseError`] is the only error the parsing core produces itself. Errors raised by setters
//! belong to the caller and pass through [`Switchboard`](crate::dispatch::Switchboard)
//! untouched; configuration problems are [`RegistryError`](crate::switches::RegistryError)s.

use thiserror::Error;

/// The argument list does not fit the switch grammar.
///
/// Positions are zero-based indexes into the argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("argument {position} ({argument:?}) is out of place{}", expectation(.expected))]
    UnexpectedArgument {
        position: usize,
        argument: String,
        expected: Option<String>,
    },

    #[error("arguments ended at position {position}{}", expectation(.expected))]
    UnexpectedEnd {
        position: usize,
        expected: Option<String>,
    },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedArgument { position, .. }
            | ParseError::UnexpectedEnd { position, .. } => *position,
        }
    }
}

fn expectation(expected: &Option<String>) -> String {
    match expected {
        Some(expected) => format!(", expected {expected}"),
        None => String::new(),
    }
}
