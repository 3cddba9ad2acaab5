//! Lexer module for raw command-line arguments
//!
//! Every raw argument is classified on its own, without looking at its neighbours. The
//! result of this stage is one [`ClassifiedToken`] per argument, which the
//! [parser](crate::parser) later consumes as a sequence.
//!
//! Two Stages
//!
//!     1. Sigil lexing: a vanilla logos lexer splits the argument text into lexemes. The only
//!        characters it cares about are the switch prefixes `--`, `-` and `/`; everything else
//!        becomes a one-character symbol. See [lexemes].
//!     2. Switch classification: a chumsky grammar assembled from the [`Registry`] at runtime
//!        decides whether the lexemes spell a short cluster, a long switch, or neither. See
//!        [classifier].
//!
//!     Keeping the prefixes in a static lexer means the grammar only ever deals with
//!     registry-specific symbols, and long names can be compared lexeme by lexeme with the
//!     argument because both go through the same lexer.
//!
//! Anything the grammar cannot consume entirely is a plain value. There is no partial result.
//!
//! [`Registry`]: crate::switches::Registry

pub mod classifier;
pub mod lexemes;
pub mod token;
pub mod tokenizer;

pub use classifier::Classifier;
pub use lexemes::{lex_argument, Lexeme};
pub use token::{ArgKind, ClassifiedToken, MatchedSwitch};
pub use tokenizer::tokenize;
