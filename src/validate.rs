//! Syntax validation with a symbol-expectation automaton

use crate::parse::{self, Located, Token};
use crate::{Operator, ValidationError};

use bit_set::BitSet;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_ATOM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z01]$").unwrap());

/// Categories of symbols recognized by the validator.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// A proposition name or a literal bit
    Atom,
    Open,
    Close,
    Not,
    Xnor,
    Implies,
    And,
    Or,
}

/// Set of categories accepted as the next symbol.
#[derive(Clone, Debug)]
struct Expectation(BitSet);

static START: Lazy<Expectation> =
    Lazy::new(|| Expectation::of(&[Category::Atom, Category::Open, Category::Not]));

static AFTER_OPERAND: Lazy<Expectation> = Lazy::new(|| {
    Expectation::of(&[
        Category::Close,
        Category::Xnor,
        Category::Implies,
        Category::And,
        Category::Or,
    ])
});

impl Category {
    /// Classify a located token, None for unknown symbols
    fn of(token: &Token) -> Option<Self> {
        match token {
            Token::Open => Some(Category::Open),
            Token::Close => Some(Category::Close),
            Token::Operator(Operator::Not) => Some(Category::Not),
            Token::Operator(Operator::Xnor) => Some(Category::Xnor),
            Token::Operator(Operator::Implies) => Some(Category::Implies),
            Token::Operator(Operator::And) => Some(Category::And),
            Token::Operator(Operator::Or) => Some(Category::Or),
            Token::Atom(s) if RE_ATOM.is_match(s) => Some(Category::Atom),
            Token::Atom(_) => None,
        }
    }

    /// The set of categories which can follow a symbol of this category
    fn followers(self) -> &'static Expectation {
        match self {
            Category::Atom | Category::Close => &AFTER_OPERAND,
            _ => &START,
        }
    }

    /// Test if a formula can end with a symbol of this category
    pub fn terminates(self) -> bool {
        matches!(self, Category::Atom | Category::Close)
    }
}

impl Expectation {
    fn of(categories: &[Category]) -> Self {
        Self(categories.iter().map(|c| *c as usize).collect())
    }

    fn accepts(&self, category: Category) -> bool {
        self.0.contains(category as usize)
    }
}

/// Check that a string is a syntactically valid formula.
///
/// The symbols of the (space-preserving) string are consumed from left to right, each symbol
/// must belong to the set of categories expected after the previous one. Validation stops on the
/// first violation, reported with the 0-based character offset of the offending symbol.
///
/// ```
/// use proptable::{validate, ValidationError};
///
/// assert!(validate("(A || b) -> !C").is_ok());
///
/// let error = validate("A # B").unwrap_err();
/// assert_eq!(error, ValidationError::UnknownSymbol { symbol: '#', position: 2 });
/// assert_eq!(error.to_string(), "Unknown symbol '#' at 2.");
/// ```
///
/// An empty string is reported as an unexpected ending.
pub fn validate(s: &str) -> Result<(), ValidationError> {
    let symbols = parse::locate(s);

    let mut depth = 0usize;
    let mut expected: &Expectation = &START;
    let mut last = None;
    for symbol in &symbols {
        let position = char_offset(s, symbol.offset);
        let first = first_char(symbol);
        let category = Category::of(&symbol.token).ok_or(ValidationError::UnknownSymbol {
            symbol: first,
            position,
        })?;

        let unexpected = ValidationError::UnexpectedSymbol {
            symbol: first,
            position,
        };
        match category {
            Category::Open => depth += 1,
            Category::Close => depth = depth.checked_sub(1).ok_or_else(|| unexpected.clone())?,
            _ => (),
        }
        if !expected.accepts(category) {
            return Err(unexpected);
        }

        trace!("validate: {:?} '{}' at {} (depth {})", category, symbol.text, position, depth);
        expected = category.followers();
        last = Some(category);
    }

    let end = s.chars().count();
    if !last.map_or(false, Category::terminates) {
        return Err(ValidationError::UnexpectedEnding { position: end });
    }
    if depth > 0 {
        return Err(ValidationError::UnclosedParenthesis { position: end });
    }
    Ok(())
}

fn char_offset(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

fn first_char(symbol: &Located) -> char {
    symbol.text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}
