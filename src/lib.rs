//! # switchparse
//!
//! A command-line switch grammar engine. Callers describe their switches in a [`Registry`]
//! and hand over the raw argument list; the crate answers which switches were given and with
//! which values, or reports where the list stopped making sense.
//!
//! ## Pipeline
//!
//!     raw args -> [lexer] (one ClassifiedToken per arg) -> [parser] (Resolved) -> [dispatch]
//!
//! Each argument is classified on its own as a short cluster (`-abc`, `/abc`), a long switch
//! (`--all-that`) or a plain value. The sequence parser then consumes the tokens by arity:
//! binary switches take nothing, single-value switches take the next plain value, list
//! switches take every plain value up to the next switch.
//!
//! ```ignore
//! use switchparse::{parse, Registry, SwitchDescriptor};
//!
//! let registry = Registry::new([
//!     SwitchDescriptor::binary().with_short('v').with_long("verbose"),
//!     SwitchDescriptor::list().with_short('f').with_long("files"),
//! ])?;
//! let resolved = parse(["-v", "--files", "a.txt", "b.txt"], &registry)?;
//! ```
//!
//! [`Switchboard`] adds setters on top of this for callers that want values written straight
//! into an options struct. [`Loader`] reads switch tables and grammar options from TOML.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod switches;

pub use config::{Loader, Settings, SyntaxOptions};
pub use dispatch::{Setter, Switchboard, SwitchboardBuilder};
pub use error::ParseError;
pub use lexer::{tokenize, ArgKind, ClassifiedToken, Classifier};
pub use parser::{parse, parse_tokens, parse_with, Resolution, Resolved, SwitchValue};
pub use switches::{Arity, Registry, RegistryError, SwitchDescriptor, SwitchId};
