//! Propositional formulas defined as expression trees

use core::ops::Not;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use itertools::Itertools;

use crate::efmt::{self, ExprFormatter, PLAIN_NOTATION};
use crate::{Formula, FormulaError, ValidationError};

/// A propositional expression tree.
///
/// Leaves are named propositions or fixed Boolean values, internal nodes apply a negation
/// or one of the binary [operators](Operator). Subtrees are shared behind reference-counted
/// pointers: expressions can not be [copied](Copy) but they can be [cloned](Clone) in constant time,
/// and are never modified after construction.
///
/// ```
/// use proptable::{Expr, Operator};
///
/// let a = Expr::proposition("A");
/// let b = Expr::proposition("B");
/// let expr = Expr::binary(Operator::Implies, !a, b);
///
/// assert_eq!(expr.to_string(), "¬A ⇒ B");
/// assert!(expr.eval(&|p| p == "A"));
/// ```
///
/// # Parsing expressions
///
/// Expressions can be parsed from strings using `!`, `<->`, `->`, `&&` and `||`.
/// Proposition names are single letters and are case-insensitive.
///
/// ```
/// use proptable::Expr;
/// # use proptable::FormulaError;
/// # fn main() -> Result<(), FormulaError> {
///
/// let expr: Expr = "a || b && !c".parse()?;
/// assert_eq!(expr.to_string(), "A ∨ B ∧ ¬C");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// A fixed Boolean value
    Literal(bool),

    /// A free proposition
    Proposition(String),

    /// Negation of a sub-expression
    Not(Arc<Expr>),

    /// Two expressions connected with a binary operator
    Binary(Operator, Arc<(Expr, Expr)>),
}

/// Logical operators, listed from the tightest to the loosest binding.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    /// Negation (prefix)
    Not,
    /// Equivalence: true if both operands have the same value
    Xnor,
    /// Implication: false only if the left operand is true and the right one is false
    Implies,
    /// Conjunction: both operands need to be true
    And,
    /// Disjunction: at least one operand needs to be true
    Or,
}

impl Operator {
    /// All operators, from the tightest to the loosest binding
    pub const ALL: [Operator; 5] = [
        Operator::Not,
        Operator::Xnor,
        Operator::Implies,
        Operator::And,
        Operator::Or,
    ];

    /// The binary operators, grouped by parsing pass (tightest first).
    ///
    /// Operators sharing a pass are combined from left to right in the order they appear.
    pub const PASSES: [&'static [Operator]; 3] = [
        &[Operator::Xnor, Operator::Implies],
        &[Operator::And],
        &[Operator::Or],
    ];

    /// Precedence rank: a higher rank binds more tightly.
    ///
    /// This rank controls the addition of necessary parenthesis when formatting expressions.
    pub fn rank(self) -> u8 {
        match self {
            Operator::Not => 5,
            Operator::Xnor => 4,
            Operator::Implies => 3,
            Operator::And => 2,
            Operator::Or => 1,
        }
    }

    /// Index of the parsing pass folding this operator (None for the unary negation).
    pub fn pass(self) -> Option<usize> {
        Self::PASSES.iter().position(|pass| pass.contains(&self))
    }

    pub fn is_binary(self) -> bool {
        self != Operator::Not
    }

    /// Apply the Boolean function of this operator.
    ///
    /// The negation ignores its second argument.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Operator::Not => !a,
            Operator::Xnor => a == b,
            Operator::Implies => !a || b,
            Operator::And => a && b,
            Operator::Or => a || b,
        }
    }
}

impl Expr {
    /// Create a leaf for a proposition name
    pub fn proposition(name: impl Into<String>) -> Self {
        Expr::Proposition(name.into())
    }

    /// Create a leaf from an atom symbol: `0` and `1` are literals, anything else names a proposition.
    pub fn atom(symbol: &str) -> Self {
        match symbol {
            "0" => Expr::Literal(false),
            "1" => Expr::Literal(true),
            _ => Expr::proposition(symbol),
        }
    }

    /// Connect two expressions with a binary operator.
    ///
    /// # Panics
    ///
    /// Panics if the operator is the unary negation.
    pub fn binary(op: Operator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        assert!(op.is_binary(), "{:?} is not a binary operator", op);
        Expr::Binary(op, Arc::new((left.into(), right.into())))
    }

    /// The operator applied at the root of this expression, None for leaves.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expr::Literal(_) | Expr::Proposition(_) => None,
            Expr::Not(_) => Some(Operator::Not),
            Expr::Binary(op, _) => Some(*op),
        }
    }

    /// Free propositions of the expression, in order of first occurrence.
    pub fn propositions(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_propositions(&mut names);
        names.into_iter().unique().map(str::to_string).collect()
    }

    fn collect_propositions<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expr::Literal(_) => (),
            Expr::Proposition(name) => names.push(name),
            Expr::Not(child) => child.collect_propositions(names),
            Expr::Binary(_, children) => {
                children.0.collect_propositions(names);
                children.1.collect_propositions(names);
            }
        }
    }

    /// Evaluate the expression, using a closure to retrieve the value of each proposition
    pub fn eval<F: Fn(&str) -> bool>(&self, valuation: &F) -> bool {
        match self {
            Expr::Literal(b) => *b,
            Expr::Proposition(name) => valuation(name),
            Expr::Not(child) => !child.eval(valuation),
            Expr::Binary(op, children) => {
                op.apply(children.0.eval(valuation), children.1.eval(valuation))
            }
        }
    }

    /// Visit the tree with a formatter.
    ///
    /// The formatter is notified of groups, operators and leaves. A child is enclosed in a group
    /// if its operator binds less tightly than its parent, or if it is the right operand of a
    /// binary operator folded in the same parsing pass.
    pub fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result {
        self._fmt_expr(f, None)
    }

    fn _fmt_expr(&self, f: &mut dyn ExprFormatter, parent: Option<(Operator, bool)>) -> fmt::Result {
        match self {
            Expr::Literal(b) => f.write_bool(*b),
            Expr::Proposition(name) => f.write_proposition(name),
            // The negation binds tighter than anything and never needs a group
            Expr::Not(child) => {
                f.write_operator(Operator::Not)?;
                child._fmt_expr(f, Some((Operator::Not, false)))
            }
            Expr::Binary(op, children) => {
                let grouped = needs_group(*op, parent);
                if grouped {
                    f.open_group()?;
                }
                children.0._fmt_expr(f, Some((*op, false)))?;
                f.write_operator(*op)?;
                children.1._fmt_expr(f, Some((*op, true)))?;
                if grouped {
                    f.close_group()?;
                }
                Ok(())
            }
        }
    }
}

fn needs_group(op: Operator, parent: Option<(Operator, bool)>) -> bool {
    match parent {
        None => false,
        Some((parent, is_right)) => {
            op.rank() < parent.rank() || (is_right && op.pass().is_some() && op.pass() == parent.pass())
        }
    }
}

impl FromStr for Expr {
    type Err = FormulaError;

    /// Parse a non-empty formula.
    ///
    /// A blank string is reported as an unexpected ending, use [Formula] to accept empty input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Formula::parse(s)?.into_tree() {
            Some(expr) => Ok(expr),
            None => Err(ValidationError::UnexpectedEnding {
                position: s.chars().count(),
            }
            .into()),
        }
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Literal(b)
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

impl From<Arc<Expr>> for Expr {
    fn from(r: Arc<Expr>) -> Self {
        Arc::try_unwrap(r).unwrap_or_else(|r| Expr::clone(&r))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", PLAIN_NOTATION.symbol(*self).trim())
    }
}

// Plain rendering, without delimiters
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(&mut efmt::NotationFormatter::new(f, &PLAIN_NOTATION))
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self::Output {
        Expr::Not(Arc::new(self))
    }
}

impl Not for &Expr {
    type Output = Expr;
    fn not(self) -> Self::Output {
        Expr::Not(Arc::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    #[test]
    fn operator_semantics() {
        for a in [false, true] {
            assert_eq!(Operator::Not.apply(a, false), !a);
            assert_eq!(Operator::Not.apply(a, true), !a);
            for b in [false, true] {
                assert_eq!(Operator::And.apply(a, b), a && b);
                assert_eq!(Operator::Or.apply(a, b), a || b);
                assert_eq!(Operator::Implies.apply(a, b), !a || b);
                assert_eq!(Operator::Xnor.apply(a, b), a == b);
            }
        }
    }

    #[test]
    fn precedence_ranks() {
        let ranks: Vec<u8> = Operator::ALL.iter().map(|op| op.rank()).collect();
        assert_eq!(ranks, vec![5, 4, 3, 2, 1]);

        assert_eq!(Operator::Not.pass(), None);
        assert_eq!(Operator::Xnor.pass(), Some(0));
        assert_eq!(Operator::Implies.pass(), Some(0));
        assert_eq!(Operator::And.pass(), Some(1));
        assert_eq!(Operator::Or.pass(), Some(2));
    }

    #[test]
    fn construct_and_display() {
        let a = Expr::proposition("A");
        let b = Expr::proposition("B");
        let c = Expr::proposition("C");

        let e = Expr::binary(Operator::Or, &a, Expr::binary(Operator::And, &b, &c));
        assert_eq!(e.to_string(), "A ∨ B ∧ C");

        let e = Expr::binary(Operator::And, Expr::binary(Operator::Or, &a, &b), &c);
        assert_eq!(e.to_string(), "(A ∨ B) ∧ C");

        let e = !Expr::binary(Operator::And, &a, &b);
        assert_eq!(e.to_string(), "¬(A ∧ B)");

        let e = !!a.clone();
        assert_eq!(e.to_string(), "¬¬A");

        let e = Expr::binary(Operator::Xnor, Expr::binary(Operator::Implies, &a, &b), &c);
        assert_eq!(e.to_string(), "(A ⇒ B) ⇔ C");

        let e = Expr::binary(Operator::Implies, Expr::binary(Operator::Xnor, &a, &b), &c);
        assert_eq!(e.to_string(), "A ⇔ B ⇒ C");
        assert_eq!(e.operator(), Some(Operator::Implies));
        assert_eq!((!&a).operator(), Some(Operator::Not));
        assert_eq!(a.operator(), None);

        // Right operands of the same pass keep their group
        let e = Expr::binary(Operator::And, &a, Expr::binary(Operator::And, &b, &c));
        assert_eq!(e.to_string(), "A ∧ (B ∧ C)");
        let e = Expr::binary(Operator::Implies, &a, Expr::binary(Operator::Xnor, &b, &c));
        assert_eq!(e.to_string(), "A ⇒ (B ⇔ C)");

        let e = Expr::binary(Operator::Or, Expr::from(true), !Expr::from(false));
        assert_eq!(e.to_string(), "1 ∨ ¬0");
    }

    #[test]
    #[should_panic]
    fn negation_is_not_binary() {
        Expr::binary(Operator::Not, true, false);
    }

    #[test]
    fn propositions_in_order() -> Result<(), FormulaError> {
        let e: Expr = "(c && a) || !c -> b && 1".parse()?;
        assert_eq!(e.propositions(), vec!["C", "A", "B"]);

        let e: Expr = "1 <-> 0".parse()?;
        assert!(e.propositions().is_empty());
        Ok(())
    }

    #[test]
    fn eval() -> Result<(), FormulaError> {
        let e: Expr = "(A && B) || (C && (D || !E))".parse()?;

        assert!(e.eval(&|p| p == "A" || p == "B"));
        assert!(!e.eval(&|p| p == "A" || p == "E"));
        assert!(e.eval(&|p| p == "C"));
        assert!(!e.eval(&|p| p == "C" || p == "E"));
        assert!(e.eval(&|p| p != "B"));

        let e: Expr = "A -> 0".parse()?;
        assert!(e.eval(&|_| false));
        assert!(!e.eval(&|_| true));
        Ok(())
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "A &&".parse::<Expr>(),
            Err(FormulaError::Invalid(ValidationError::UnexpectedEnding { position: 4 }))
        );
        assert_eq!(
            "".parse::<Expr>(),
            Err(FormulaError::Invalid(ValidationError::UnexpectedEnding { position: 0 }))
        );
    }
}
