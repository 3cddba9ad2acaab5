//! Sequence parser over classified tokens using chumsky
//!
//! Productions, tried in this order at every position:
//!
//!     binary:  BinarySwitch
//!     single:  SingleValueSwitch PlainValue
//!     list:    ListValueSwitch PlainValue+
//!
//! The list production is greedy: it takes every plain value up to the next switch or the end
//! of the stream. The whole stream must be consumed; a position where no production applies
//! (a stray plain value, a value switch with nothing after it) fails the parse.

use chumsky::prelude::*;
use tracing::debug;

use super::resolution::{Resolution, Resolved, SwitchValue};
use crate::error::ParseError;
use crate::lexer::{ArgKind, ClassifiedToken};
use crate::switches::Arity;

/// Type alias for parser error
type TokenError = Simple<ClassifiedToken>;

/// Helper: match one token of the given kind
fn token_of(kind: ArgKind) -> impl Parser<ClassifiedToken, ClassifiedToken, Error = TokenError> + Clone {
    filter(move |token: &ClassifiedToken| token.kind == kind).labelled(kind.label())
}

/// Parse a plain value and keep its text
fn plain_value() -> impl Parser<ClassifiedToken, String, Error = TokenError> + Clone {
    token_of(ArgKind::PlainValue).map(|token| token.raw)
}

/// Resolve every switch of a token in written order; the value-bearing one gets `value`
fn resolve(token: ClassifiedToken, value: SwitchValue) -> Vec<Resolution> {
    token
        .matched
        .into_iter()
        .map(|matched| Resolution {
            switch: matched.id,
            value: match matched.arity {
                Arity::Binary => SwitchValue::Flag,
                Arity::Single | Arity::List => value.clone(),
            },
        })
        .collect()
}

/// Parse a complete switch sequence
pub(crate) fn switch_sequence() -> impl Parser<ClassifiedToken, Vec<Resolution>, Error = TokenError> {
    let binary = token_of(ArgKind::BinarySwitch).map(|token| resolve(token, SwitchValue::Flag));

    let single = token_of(ArgKind::SingleValueSwitch)
        .then(plain_value())
        .map(|(token, value)| resolve(token, SwitchValue::Single(value)));

    let list = token_of(ArgKind::ListValueSwitch)
        .then(plain_value().repeated().at_least(1))
        .map(|(token, values)| resolve(token, SwitchValue::List(values)));

    binary
        .or(single)
        .or(list)
        .repeated()
        .then_ignore(end())
        .map(|groups: Vec<Vec<Resolution>>| groups.into_iter().flatten().collect())
}

/// Run the sequence parser over a token stream
pub fn parse_tokens(tokens: Vec<ClassifiedToken>) -> Result<Resolved, ParseError> {
    let count = tokens.len();
    match switch_sequence().parse(tokens) {
        Ok(resolutions) => {
            debug!(tokens = count, resolutions = resolutions.len(), "resolved switch sequence");
            Ok(Resolved::new(resolutions))
        }
        Err(errors) => {
            let error = furthest(errors);
            debug!(%error, "rejected switch sequence");
            Err(error)
        }
    }
}

/// Report the error that got furthest into the stream
fn furthest(errors: Vec<TokenError>) -> ParseError {
    errors
        .into_iter()
        .max_by_key(|error| error.span().start)
        .map(|error| {
            let position = error.span().start;
            let expected = error.label().map(str::to_string);
            match error.found() {
                Some(token) => ParseError::UnexpectedArgument {
                    position,
                    argument: token.raw.clone(),
                    expected,
                },
                None => ParseError::UnexpectedEnd { position, expected },
            }
        })
        .unwrap_or(ParseError::UnexpectedEnd {
            position: 0,
            expected: None,
        })
}
