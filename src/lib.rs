//! Parse propositional formulas, render them and compute their truth tables.
//!
//! A [formula](Formula) combines named propositions (single letters, case-insensitive) and the literals
//! `0` and `1` with the operators `!` (NOT), `<->` (XNOR), `->` (IMPLIES), `&&` (AND) and `||` (OR),
//! listed from the tightest to the loosest binding. Parenthesis group sub-expressions and spaces are ignored.
//! XNOR and IMPLIES share the same precedence level: like all binary operators, they are combined from left to right.
//!
//! The input string is first [validated](validate), then split into [tokens](tokenize) and [built](build) into an
//! [expression tree](Expr).
//!
//! ```
//! use proptable::{Expr, Formula, Operator};
//! # use proptable::FormulaError;
//! # fn main() -> Result<(), FormulaError> {
//!
//! let formula = Formula::parse("a || b && !c")?;
//!
//! let (a, b, c) = (Expr::proposition("A"), Expr::proposition("B"), Expr::proposition("C"));
//! let expected = Expr::binary(Operator::Or, a, Expr::binary(Operator::And, b, !c));
//! assert_eq!(formula.tree(), Some(&expected));
//! # Ok(())
//! # }
//! ```
//!
//! # Validation
//!
//! Invalid formulas are rejected with a single [error](ValidationError) giving the position of the offending
//! symbol in the original string.
//!
//! ```
//! use proptable::{validate, ValidationError};
//!
//! assert_eq!(
//!     validate("(A))"),
//!     Err(ValidationError::UnexpectedSymbol { symbol: ')', position: 3 })
//! );
//! assert_eq!(validate("A &&").unwrap_err().to_string(), "Unexpected expression ending.");
//! ```
//!
//! # Rendering
//!
//! Expressions are displayed with a [Notation], which provides the glyphs of the operators.
//! Parenthesis are only added where the precedence of operators would otherwise change the tree.
//!
//! ```
//! use proptable::{Formula, PLAIN_NOTATION};
//! # use proptable::FormulaError;
//! # fn main() -> Result<(), FormulaError> {
//!
//! let formula = Formula::parse("((!a) && (b || c)) -> c")?;
//! assert_eq!(formula.to_string(), "(¬A ∧ (B ∨ C)) ⇒ C");
//! assert_eq!(formula.to_latex(), "$(\\neg A \\land (B \\lor C)) \\Rightarrow C$");
//! assert_eq!(formula.render_delimited(&PLAIN_NOTATION), formula.to_string());
//!
//! // The plain rendering is a valid input for the same tree
//! assert_eq!(Formula::parse(&formula.to_string())?.tree(), formula.tree());
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables
//!
//! A [truth table](TruthTable) has one column for each free proposition, enumerating all assignments,
//! followed by one column for each distinct compound sub-expression. Each sub-expression is listed after its
//! operands, its column is named after its rendering.
//!
//! ```
//! use proptable::Formula;
//! # use proptable::FormulaError;
//! # fn main() -> Result<(), FormulaError> {
//!
//! let table = Formula::parse("A && B")?.truth_table()?;
//! assert_eq!(table.headers(), vec!["A", "B", "A ∧ B"]);
//! assert_eq!(table.rows_count(), 4);
//! assert_eq!(table.row(3), vec![true, true, true]);
//! assert_eq!(table.column("A ∧ B").unwrap().data(), &[false, false, false, true]);
//!
//! // Empty input gives an empty table
//! assert!(Formula::parse("")?.truth_table()?.is_empty());
//! # Ok(())
//! # }
//! ```

mod build;
mod efmt;
mod error;
mod expr;
mod formula;
mod operations;
mod parse;
mod table;
mod validate;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use build::build;
pub use efmt::{ExprFormatter, Notation, NotationFormatter, Rendered, LATEX_NOTATION, PLAIN_NOTATION};
pub use error::{FormulaError, ValidationError};
pub use expr::{Expr, Operator};
pub use formula::Formula;
pub use operations::{operations, propositions, Operand, Operation};
pub use parse::{tokenize, Token};
pub use table::{Column, TableConfig, TruthTable, DEFAULT_MAX_PROPOSITIONS};
pub use validate::{validate, Category};
