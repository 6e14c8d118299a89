//! Split formulas into tokens

use crate::Operator;
use log::trace;
use pest::Parser;
use std::fmt;

#[derive(Parser)]
#[grammar_inline = r####"
tokens  =  { SOI ~ token* ~ EOI }
token   = _{ open | close | not | xnor | implies | and | or | atom }
open    =  { "(" }
close   =  { ")" }
not     =  { "!" | "¬" }
xnor    =  { "<->" | "⇔" }
implies =  { "->" | "⇒" }
and     =  { "&&" | "∧" }
or      =  { "||" | "∨" }
atom    = @{ ANY }

WHITESPACE = _{ " " }
"####]
struct TokenParser;

/// Atomic symbol of a formula.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    /// Opening parenthesis
    Open,
    /// Closing parenthesis
    Close,
    /// Unary or binary operator
    Operator(Operator),
    /// Any other single character: a proposition name, a literal bit or an unknown symbol
    Atom(String),
}

/// A token with the byte offset of its first character in the source string.
pub(crate) struct Located<'a> {
    pub(crate) token: Token,
    pub(crate) text: &'a str,
    pub(crate) offset: usize,
}

/// Split a string into tokens.
///
/// Spaces are stripped first, then operators are matched before falling back to single-character atoms.
/// No validation is performed here: unknown characters are returned as atoms.
/// Callers uppercase the string first to make proposition names case-insensitive.
///
/// ```
/// use proptable::{tokenize, Operator, Token};
///
/// let tokens = tokenize("!(A <-> b)");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Operator(Operator::Not),
///         Token::Open,
///         Token::Atom("A".into()),
///         Token::Operator(Operator::Xnor),
///         Token::Atom("b".into()),
///         Token::Close,
///     ]
/// );
/// ```
pub fn tokenize(s: &str) -> Vec<Token> {
    let normalized: String = s.split(' ').collect();
    let tokens: Vec<Token> = locate(&normalized).into_iter().map(|l| l.token).collect();
    trace!("tokenize({:?}) -> {} tokens", s, tokens.len());
    tokens
}

/// Split a string into tokens, keeping track of their position.
///
/// # Panics
///
/// Panics if the grammar rejects the string, which can not happen as any character is an atom.
pub(crate) fn locate(s: &str) -> Vec<Located> {
    let mut located = Vec::new();
    let pairs = match TokenParser::parse(Rule::tokens, s) {
        Err(e) => panic!("The token grammar rejected {:?}: {}", s, e),
        Ok(mut pairs) => match pairs.next() {
            None => return located,
            Some(pair) => pair.into_inner(),
        },
    };
    for pair in pairs {
        let token = match pair.as_rule() {
            Rule::open => Token::Open,
            Rule::close => Token::Close,
            Rule::not => Token::Operator(Operator::Not),
            Rule::xnor => Token::Operator(Operator::Xnor),
            Rule::implies => Token::Operator(Operator::Implies),
            Rule::and => Token::Operator(Operator::And),
            Rule::or => Token::Operator(Operator::Or),
            Rule::atom => Token::Atom(pair.as_str().to_string()),
            // End of input marker
            _ => continue,
        };
        located.push(Located {
            token,
            text: pair.as_str(),
            offset: pair.as_span().start(),
        });
    }
    located
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Operator(Operator::Not) => write!(f, "!"),
            Token::Operator(Operator::Xnor) => write!(f, "<->"),
            Token::Operator(Operator::Implies) => write!(f, "->"),
            Token::Operator(Operator::And) => write!(f, "&&"),
            Token::Operator(Operator::Or) => write!(f, "||"),
            Token::Atom(s) => write!(f, "{}", s),
        }
    }
}
