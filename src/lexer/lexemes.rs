//! Sigil lexemes for a single raw argument
//!
//! The lexer is defined with the logos derive macro. It knows nothing about any registry:
//! the only distinguished inputs are the switch prefixes.
use logos::Logos;
use std::fmt;

/// All possible lexemes inside one argument
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    // Long switch prefix; longest match wins over two dashes
    #[token("--")]
    DoubleDash,

    // Short cluster prefixes
    #[token("-")]
    Dash,
    #[token("/")]
    Slash,

    // Any other character, one at a time
    #[regex(r"[^\-/]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

impl Lexeme {
    /// Check if this lexeme can open a short cluster
    pub fn is_short_prefix(&self) -> bool {
        matches!(self, Lexeme::Dash | Lexeme::Slash)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::DoubleDash => f.write_str("--"),
            Lexeme::Dash => f.write_str("-"),
            Lexeme::Slash => f.write_str("/"),
            Lexeme::Symbol(c) => write!(f, "{c}"),
        }
    }
}

/// Lex one argument. Returns `None` if logos rejects any part of it.
pub fn lex_argument(raw: &str) -> Option<Vec<Lexeme>> {
    Lexeme::lexer(raw).collect::<Result<Vec<_>, _>>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(raw: &str) -> Vec<Lexeme> {
        lex_argument(raw).expect("argument should lex")
    }

    #[test]
    fn test_long_prefix() {
        assert_eq!(
            lex("--all"),
            vec![
                Lexeme::DoubleDash,
                Lexeme::Symbol('a'),
                Lexeme::Symbol('l'),
                Lexeme::Symbol('l')
            ]
        );
    }

    #[test]
    fn test_short_prefixes() {
        assert_eq!(lex("-b"), vec![Lexeme::Dash, Lexeme::Symbol('b')]);
        assert_eq!(lex("/b"), vec![Lexeme::Slash, Lexeme::Symbol('b')]);
    }

    #[test]
    fn test_dashes_inside_names() {
        // "all-that" keeps its inner dash as a separate lexeme
        assert_eq!(
            lex("--a-t"),
            vec![
                Lexeme::DoubleDash,
                Lexeme::Symbol('a'),
                Lexeme::Dash,
                Lexeme::Symbol('t')
            ]
        );
        assert_eq!(
            lex("---"),
            vec![Lexeme::DoubleDash, Lexeme::Dash]
        );
    }

    #[test]
    fn test_plain_text_and_whitespace() {
        assert_eq!(
            lex("7 x"),
            vec![
                Lexeme::Symbol('7'),
                Lexeme::Symbol(' '),
                Lexeme::Symbol('x')
            ]
        );
        assert_eq!(lex(""), Vec::<Lexeme>::new());
    }

    #[test]
    fn test_multibyte_symbols() {
        assert_eq!(lex("-é"), vec![Lexeme::Dash, Lexeme::Symbol('é')]);
    }

    #[test]
    fn test_lexeme_predicates() {
        assert!(Lexeme::Dash.is_short_prefix());
        assert!(Lexeme::Slash.is_short_prefix());
        assert!(!Lexeme::DoubleDash.is_short_prefix());
        assert!(!Lexeme::Symbol('a').is_short_prefix());
    }
}
