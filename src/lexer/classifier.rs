//! Switch classifier built from a registry.
//!
//! The grammar has two alternatives, and an argument is a switch only if one of them consumes
//! every lexeme:
//!
//!     short form:  ( "-" | "/" ) binary* value? binary*
//!     long form:   "--" <one registered long name, matched whole>
//!
//! `binary` is any registered binary short name and `value` any registered single or list
//! short name. A cluster may therefore carry at most one value-bearing switch, anywhere in the
//! cluster. Each long name alternative ends with `end()`, so a shorter name never wins on a
//! prefix of a longer argument.
//!
//! The grammar is rebuilt for every parse and never cached.

use chumsky::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::lexemes::{lex_argument, Lexeme};
use super::token::{ClassifiedToken, MatchedSwitch};
use crate::config::SyntaxOptions;
use crate::switches::Registry;

/// Type alias for grammar errors over lexemes
type LexemeError = Simple<Lexeme>;

/// Type alias for a type-erased grammar fragment
type Fragment<O> = BoxedParser<'static, Lexeme, O, LexemeError>;

/// Recognizes single raw arguments as switch tokens for one registry
pub struct Classifier {
    grammar: Fragment<Vec<MatchedSwitch>>,
}

impl Classifier {
    pub fn new(registry: &Registry, options: &SyntaxOptions) -> Self {
        let mut binary = HashMap::new();
        let mut valued = HashMap::new();
        let mut long_names = Vec::new();

        for (id, switch) in registry.iter() {
            let matched = MatchedSwitch {
                id,
                arity: switch.arity,
            };
            if let Some(short) = switch.short {
                if switch.arity.takes_value() {
                    valued.insert(short, matched);
                } else {
                    binary.insert(short, matched);
                }
            }
            if let Some(long) = &switch.long {
                long_names.push(long_name(long, matched));
            }
        }

        debug!(
            binary_short = binary.len(),
            valued_short = valued.len(),
            long = long_names.len(),
            slash_prefix = options.slash_prefix,
            "built switch grammar"
        );

        let long_form = just(Lexeme::DoubleDash).ignore_then(alternatives(long_names));
        let short_form = short_prefix(options.slash_prefix)
            .ignore_then(cluster(Arc::new(binary), Arc::new(valued)))
            .then_ignore(end());

        Self {
            grammar: long_form.or(short_form).boxed(),
        }
    }

    /// Classify one raw argument. Anything that is not entirely a switch is a plain value.
    pub fn classify(&self, raw: &str) -> ClassifiedToken {
        let Some(lexemes) = lex_argument(raw) else {
            return ClassifiedToken::plain(raw);
        };
        match self.grammar.parse(lexemes) {
            Ok(matched) => ClassifiedToken::switch(matched, raw),
            Err(_) => ClassifiedToken::plain(raw),
        }
    }
}

/// Parse "-" (and "/" when enabled)
fn short_prefix(slash_prefix: bool) -> impl Parser<Lexeme, Lexeme, Error = LexemeError> + Clone {
    filter(move |lexeme: &Lexeme| {
        lexeme.is_short_prefix() && (slash_prefix || *lexeme == Lexeme::Dash)
    })
}

/// Parse one short switch character out of `table`
fn short_switch(
    table: Arc<HashMap<char, MatchedSwitch>>,
    what: &'static str,
) -> impl Parser<Lexeme, MatchedSwitch, Error = LexemeError> + Clone {
    filter_map(move |span, lexeme: Lexeme| match lexeme {
        Lexeme::Symbol(c) => table
            .get(&c)
            .copied()
            .ok_or_else(|| Simple::custom(span, format!("'{c}' is not a {what} switch"))),
        other => Err(Simple::custom(
            span,
            format!("expected a {what} switch, found '{other}'"),
        )),
    })
}

/// Parse the body of a short cluster: binary* value? binary*
fn cluster(
    binary: Arc<HashMap<char, MatchedSwitch>>,
    valued: Arc<HashMap<char, MatchedSwitch>>,
) -> impl Parser<Lexeme, Vec<MatchedSwitch>, Error = LexemeError> + Clone {
    let binary = short_switch(binary, "binary");
    let valued = short_switch(valued, "value-bearing");

    binary
        .clone()
        .repeated()
        .then(valued.or_not())
        .then(binary.repeated())
        .map(|((mut written, value), tail)| {
            written.extend(value);
            written.extend(tail);
            written
        })
}

/// Parse the remainder of a long switch, which must be exactly `name`
fn long_name(name: &str, matched: MatchedSwitch) -> Fragment<Vec<MatchedSwitch>> {
    // Same lexer as the argument, so inner dashes compare as lexemes
    let spelled = lex_argument(name).unwrap_or_default();
    just::<Lexeme, _, LexemeError>(spelled)
        .then_ignore(end())
        .to(vec![matched])
        .boxed()
}

/// Try each fragment in turn; with no fragments, never match
fn alternatives<O: 'static>(fragments: Vec<Fragment<O>>) -> Fragment<O> {
    fragments
        .into_iter()
        .reduce(|accepted, next| accepted.or(next).boxed())
        .unwrap_or_else(|| {
            empty()
                .try_map(|(), span| Err(Simple::custom(span, "no long switches are registered")))
                .boxed()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::ArgKind;
    use crate::switches::{SwitchDescriptor, SwitchId};

    fn registry() -> Registry {
        Registry::new([
            SwitchDescriptor::binary().with_short('a').with_long("all"),
            SwitchDescriptor::binary().with_short('b'),
            SwitchDescriptor::binary().with_short('c'),
            SwitchDescriptor::binary().with_short('d'),
            SwitchDescriptor::single().with_short('e').with_long("all-that"),
            SwitchDescriptor::list().with_short('f').with_long("files"),
        ])
        .expect("valid registry")
    }

    fn classify(raw: &str) -> ClassifiedToken {
        Classifier::new(&registry(), &SyntaxOptions::default()).classify(raw)
    }

    fn ids(token: &ClassifiedToken) -> Vec<usize> {
        token.matched.iter().map(|m| m.id.index()).collect()
    }

    #[test]
    fn test_single_short_binary() {
        let token = classify("-a");
        assert_eq!(token.kind, ArgKind::BinarySwitch);
        assert_eq!(ids(&token), vec![0]);
    }

    #[test]
    fn test_binary_cluster_keeps_written_order() {
        let token = classify("-dcb");
        assert_eq!(token.kind, ArgKind::BinarySwitch);
        assert_eq!(ids(&token), vec![3, 2, 1]);
    }

    #[test]
    fn test_value_switch_anywhere_in_cluster() {
        for (raw, expected) in [
            ("-ebcd", vec![4, 1, 2, 3]),
            ("-becd", vec![1, 4, 2, 3]),
            ("-bcde", vec![1, 2, 3, 4]),
        ] {
            let token = classify(raw);
            assert_eq!(token.kind, ArgKind::SingleValueSwitch, "{raw}");
            assert_eq!(ids(&token), expected, "{raw}");
        }
    }

    #[test]
    fn test_two_value_switches_in_cluster_is_plain() {
        let token = classify("-bfcde");
        assert_eq!(token.kind, ArgKind::PlainValue);
        assert!(token.matched.is_empty());
        assert_eq!(token.raw, "-bfcde");
    }

    #[test]
    fn test_long_names_match_whole() {
        let token = classify("--all");
        assert_eq!(ids(&token), vec![0]);
        assert_eq!(token.kind, ArgKind::BinarySwitch);

        let token = classify("--all-that");
        assert_eq!(ids(&token), vec![4]);
        assert_eq!(token.kind, ArgKind::SingleValueSwitch);

        let token = classify("--files");
        assert_eq!(token.kind, ArgKind::ListValueSwitch);
        assert_eq!(token.matched[0].id, SwitchId(5));
    }

    #[test]
    fn test_unregistered_text_is_plain() {
        for raw in ["Hello", "--all-these", "--al", "-x", "-ax", "--", "", "77", "a-b"] {
            let token = classify(raw);
            assert_eq!(token.kind, ArgKind::PlainValue, "{raw:?}");
            assert_eq!(token.raw, raw);
        }
    }

    #[test]
    fn test_long_name_with_single_dash_is_plain() {
        // "-all" is a cluster of 'a', 'l', 'l'; 'l' is not registered
        assert_eq!(classify("-all").kind, ArgKind::PlainValue);
    }

    #[test]
    fn test_slash_prefix() {
        let token = classify("/bc");
        assert_eq!(token.kind, ArgKind::BinarySwitch);
        assert_eq!(ids(&token), vec![1, 2]);

        let strict = Classifier::new(&registry(), &SyntaxOptions { slash_prefix: false });
        assert_eq!(strict.classify("/bc").kind, ArgKind::PlainValue);
        assert_eq!(strict.classify("-bc").kind, ArgKind::BinarySwitch);
    }

    #[test]
    fn test_bare_prefix_is_empty_binary_cluster() {
        let token = classify("-");
        assert_eq!(token.kind, ArgKind::BinarySwitch);
        assert!(token.matched.is_empty());
    }

    #[test]
    fn test_registry_without_long_names() {
        let registry = Registry::new([SwitchDescriptor::binary().with_short('q')])
            .expect("valid registry");
        let classifier = Classifier::new(&registry, &SyntaxOptions::default());
        assert_eq!(classifier.classify("--q").kind, ArgKind::PlainValue);
        assert_eq!(classifier.classify("-q").kind, ArgKind::BinarySwitch);
    }

    #[test]
    fn test_empty_registry_classifies_everything_as_plain_or_empty_cluster() {
        let classifier = Classifier::new(&Registry::default(), &SyntaxOptions::default());
        assert_eq!(classifier.classify("--all").kind, ArgKind::PlainValue);
        assert_eq!(classifier.classify("-a").kind, ArgKind::PlainValue);
        assert_eq!(classifier.classify("-").kind, ArgKind::BinarySwitch);
    }
}
