//! Build expression trees from token sequences
//!
//! The sequence is reduced in successive stages:
//! 1. balanced parenthesis spans are folded into nested groups,
//! 2. each negation takes the following term as operand,
//! 3. binary operators are combined pass after pass, from the tightest to the loosest
//!    ([Operator::PASSES]), from left to right within a pass.
//!
//! A nested group is reduced completely before it is used as an operand, a group containing a
//! single term is replaced by this term.

use crate::parse::Token;
use crate::{Expr, Operator};
use log::debug;

/// A partially reduced sequence item
#[derive(Debug)]
enum Term {
    /// A token which has not been consumed yet (only operators once groups are folded)
    Token(Token),
    /// The content of a pair of parenthesis
    Group(Vec<Term>),
    /// A completed sub-expression
    Node(Expr),
}

/// Build the expression tree for a sequence of tokens, None for an empty sequence.
///
/// The sequence is expected to come from a [validated](crate::validate) formula.
///
/// # Panics
///
/// Panics if the sequence is malformed (unbalanced parenthesis, empty group, operator without operand
/// or two adjacent operands): such a sequence is rejected by the validator and should never reach this point.
///
/// ```
/// use proptable::{build, tokenize, Expr, Operator};
///
/// let tree = build(&tokenize("A || B && C")).unwrap();
/// let expected = Expr::binary(
///     Operator::Or,
///     Expr::proposition("A"),
///     Expr::binary(Operator::And, Expr::proposition("B"), Expr::proposition("C")),
/// );
/// assert_eq!(tree, expected);
///
/// assert_eq!(build(&[]), None);
/// ```
pub fn build(tokens: &[Token]) -> Option<Expr> {
    if tokens.is_empty() {
        return None;
    }
    let terms = fold_parentheses(&mut tokens.iter(), false);
    let expr = fold_sequence(terms);
    debug!("build: {} tokens -> {}", tokens.len(), &expr);
    Some(expr)
}

/// Replace each balanced parenthesis span with a nested group
fn fold_parentheses<'a>(tokens: &mut impl Iterator<Item = &'a Token>, nested: bool) -> Vec<Term> {
    let mut terms = Vec::new();
    while let Some(token) = tokens.next() {
        match token {
            Token::Open => terms.push(Term::Group(fold_parentheses(tokens, true))),
            Token::Close if nested => return terms,
            Token::Close => panic!("Unmatched closing parenthesis"),
            t => terms.push(Term::Token(t.clone())),
        }
    }
    assert!(!nested, "Unclosed parenthesis");
    terms
}

/// Reduce a sequence without parenthesis into a single expression
fn fold_sequence(terms: Vec<Term>) -> Expr {
    let mut terms = fold_unary(terms);
    for operators in Operator::PASSES {
        terms = fold_binary(terms, operators);
    }

    let mut terms = terms.into_iter();
    let root = match terms.next() {
        None => panic!("Empty group"),
        Some(term) => term.into_expr(),
    };
    if let Some(extra) = terms.next() {
        panic!("Unconnected term {:?} after {}", extra, root);
    }
    root
}

/// Turn atoms and groups into nodes, and apply negations to the following term
fn fold_unary(terms: Vec<Term>) -> Vec<Term> {
    let mut folded = Vec::with_capacity(terms.len());
    let mut terms = terms.into_iter();
    while let Some(term) = terms.next() {
        folded.push(unary_term(term, &mut terms));
    }
    folded
}

fn unary_term(term: Term, rest: &mut impl Iterator<Item = Term>) -> Term {
    match term {
        Term::Token(Token::Operator(Operator::Not)) => {
            let operand = match rest.next() {
                None => panic!("Negation without operand"),
                Some(next) => unary_term(next, rest),
            };
            Term::Node(!operand.into_expr())
        }
        Term::Token(Token::Atom(symbol)) => Term::Node(Expr::atom(&symbol)),
        Term::Group(inner) => Term::Node(fold_sequence(inner)),
        other => other,
    }
}

/// Combine the operators of a single pass with their neighbours, from left to right
fn fold_binary(terms: Vec<Term>, operators: &[Operator]) -> Vec<Term> {
    let mut folded: Vec<Term> = Vec::with_capacity(terms.len());
    let mut terms = terms.into_iter();
    while let Some(term) = terms.next() {
        match term {
            Term::Token(Token::Operator(op)) if operators.contains(&op) => {
                let left = match folded.pop() {
                    None => panic!("Missing left operand for {:?}", op),
                    Some(left) => left.into_expr(),
                };
                let right = match terms.next() {
                    None => panic!("Missing right operand for {:?}", op),
                    Some(right) => right.into_expr(),
                };
                folded.push(Term::Node(Expr::binary(op, left, right)));
            }
            other => folded.push(other),
        }
    }
    folded
}

impl Term {
    fn into_expr(self) -> Expr {
        match self {
            Term::Node(expr) => expr,
            Term::Group(inner) => fold_sequence(inner),
            Term::Token(token) => panic!("Dangling token '{}'", token),
        }
    }
}
