//! Extract the free propositions and the compound sub-expressions of a tree

use crate::{Expr, Notation, Operator};
use std::fmt;

/// Operand of an [Operation]: a fixed value or the name of a truth table column.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Operand {
    Literal(bool),
    /// A proposition or the rendering of a compound sub-expression
    Column(String),
}

/// A compound sub-expression of a formula, described by its operator and direct operands.
///
/// The name of the operation is the rendering of the sub-expression, it identifies its truth table column.
/// Operands naming compound sub-expressions refer to the names of their own operations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Operation {
    pub name: String,
    pub operator: Operator,
    pub left: Operand,
    /// Second operand of binary operators, None for negations
    pub right: Option<Operand>,
}

/// Free propositions of a tree, in order of first occurrence (see [Expr::propositions]).
pub fn propositions(expr: &Expr) -> Vec<String> {
    expr.propositions()
}

/// List one operation for each compound node of the tree.
///
/// The tree is visited in post-order: an operation is always listed after the operations
/// of its operands. Identical sub-expressions appearing several times are listed each time.
///
/// ```
/// use proptable::{operations, Expr, Operand, Operator, PLAIN_NOTATION};
/// # use proptable::FormulaError;
/// # fn main() -> Result<(), FormulaError> {
///
/// let expr: Expr = "!A || B".parse()?;
/// let ops = operations(&expr, &PLAIN_NOTATION);
/// let names: Vec<&str> = ops.iter().map(|op| op.name.as_str()).collect();
/// assert_eq!(names, vec!["¬A", "¬A ∨ B"]);
///
/// assert_eq!(ops[1].operator, Operator::Or);
/// assert_eq!(ops[1].left, Operand::Column("¬A".to_string()));
/// assert_eq!(ops[1].right, Some(Operand::Column("B".to_string())));
/// # Ok(())
/// # }
/// ```
pub fn operations(expr: &Expr, notation: &Notation) -> Vec<Operation> {
    let mut result = Vec::new();
    collect_operations(expr, notation, &mut result);
    result
}

fn collect_operations(expr: &Expr, notation: &Notation, result: &mut Vec<Operation>) {
    let (operator, left, right) = match expr {
        Expr::Literal(_) | Expr::Proposition(_) => return,
        Expr::Not(child) => {
            collect_operations(child, notation, result);
            (Operator::Not, Operand::of(child, notation), None)
        }
        Expr::Binary(op, children) => {
            collect_operations(&children.0, notation, result);
            collect_operations(&children.1, notation, result);
            (
                *op,
                Operand::of(&children.0, notation),
                Some(Operand::of(&children.1, notation)),
            )
        }
    };
    result.push(Operation {
        name: notation.render(expr),
        operator,
        left,
        right,
    });
}

impl Operand {
    fn of(expr: &Expr, notation: &Notation) -> Self {
        match expr {
            Expr::Literal(b) => Operand::Literal(*b),
            Expr::Proposition(name) => Operand::Column(name.clone()),
            _ => Operand::Column(notation.render(expr)),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Literal(false) => write!(f, "0"),
            Operand::Literal(true) => write!(f, "1"),
            Operand::Column(name) => write!(f, "[{}]", name),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} := {:?}({}", self.name, self.operator, self.left)?;
        if let Some(right) = &self.right {
            write!(f, ", {}", right)?;
        }
        write!(f, ")")
    }
}
