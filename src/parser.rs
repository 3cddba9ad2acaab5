//! Parser for classified argument streams
//!
//! The [sequence] parser walks the token stream left to right with three productions (binary,
//! single, list) and turns it into a [`Resolved`] set of switch values. The [api] functions
//! chain classification and sequencing for a raw argument list.
//!
//! Nothing is dispatched here: the whole stream is checked before a caller sees any value, so
//! a grammar error never leaves a half-applied result behind.

pub mod api;
pub mod resolution;
pub mod sequence;

pub use api::{parse, parse_with};
pub use resolution::{Resolution, Resolved, SwitchValue};
pub use sequence::parse_tokens;
