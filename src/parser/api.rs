//! Public API for the parser.

use crate::config::SyntaxOptions;
use crate::error::ParseError;
use crate::lexer::{tokenize, Classifier};
use crate::parser::resolution::Resolved;
use crate::parser::sequence::parse_tokens;
use crate::switches::Registry;

/// Parse raw arguments against `registry` with the default syntax.
pub fn parse<I, S>(args: I, registry: &Registry) -> Result<Resolved, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with(args, registry, &SyntaxOptions::default())
}

/// Parse raw arguments against `registry`: classify each one, then consume the sequence.
///
/// The classifier is built for this call only.
pub fn parse_with<I, S>(
    args: I,
    registry: &Registry,
    options: &SyntaxOptions,
) -> Result<Resolved, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = Classifier::new(registry, options);
    let tokens = tokenize(args, &classifier);
    parse_tokens(tokens)
}
