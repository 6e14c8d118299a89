//! Formatting API for expressions

use crate::{Expr, Operator};

use std::fmt;

/// Glyphs used to display the operators of an expression.
///
/// Binary operator glyphs include their surrounding spaces. The delimiters enclose a complete
/// rendering when it is displayed on its own (for example as a table header).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Notation<'a> {
    s_not: &'a str,
    s_xnor: &'a str,
    s_implies: &'a str,
    s_and: &'a str,
    s_or: &'a str,
    delimiters: (&'a str, &'a str),
}

/// Plain symbolic notation: `¬A ∧ (B ∨ C)`
pub static PLAIN_NOTATION: Notation = Notation {
    s_not: "¬",
    s_xnor: " ⇔ ",
    s_implies: " ⇒ ",
    s_and: " ∧ ",
    s_or: " ∨ ",
    delimiters: ("", ""),
};

/// Typeset notation for inline LaTeX math: `$\neg A \land (B \lor C)$`
pub static LATEX_NOTATION: Notation = Notation {
    s_not: "\\neg ",
    s_xnor: " \\Leftrightarrow ",
    s_implies: " \\Rightarrow ",
    s_and: " \\land ",
    s_or: " \\lor ",
    delimiters: ("$", "$"),
};

/// An expression rendered with a specific notation, without delimiters.
pub struct Rendered<'a> {
    expr: &'a Expr,
    notation: &'a Notation<'a>,
}

/// Define hooks to display separate parts of expressions.
///
/// This trait provide entry points used by [crate::Expr::fmt_with] to control the presentation of the expression.
/// The expression visits the inner tree and calls the hooks defined in this trait for each node and leaf,
/// the decision to enclose a sub-expression in a group is taken by the expression itself.
pub trait ExprFormatter {
    /// Pass-through function calling an internal [fmt::Formatter].
    ///
    /// This function enables the use of the ```write!``` macro in other functions.
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;

    /// Write a fixed Boolean leaf
    fn write_bool(&mut self, b: bool) -> fmt::Result {
        match b {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    /// Write a proposition leaf
    fn write_proposition(&mut self, name: &str) -> fmt::Result {
        write!(self, "{}", name)
    }

    /// Write an operator: before the operand of a negation, between the operands of binary operators
    fn write_operator(&mut self, op: Operator) -> fmt::Result;

    fn open_group(&mut self) -> fmt::Result {
        write!(self, "(")
    }

    fn close_group(&mut self) -> fmt::Result {
        write!(self, ")")
    }
}

impl<'a> Notation<'a> {
    /// Define a custom notation without delimiters
    pub fn new(s_not: &'a str, s_xnor: &'a str, s_implies: &'a str, s_and: &'a str, s_or: &'a str) -> Self {
        Self {
            s_not,
            s_xnor,
            s_implies,
            s_and,
            s_or,
            delimiters: ("", ""),
        }
    }

    pub fn with_delimiters(mut self, open: &'a str, close: &'a str) -> Self {
        self.delimiters = (open, close);
        self
    }

    pub fn symbol(&self, op: Operator) -> &'a str {
        match op {
            Operator::Not => self.s_not,
            Operator::Xnor => self.s_xnor,
            Operator::Implies => self.s_implies,
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
        }
    }

    pub fn delimiters(&self) -> (&'a str, &'a str) {
        self.delimiters
    }

    /// Wrap a rendered string in the delimiters of this notation
    pub fn delimit(&self, s: &str) -> String {
        format!("{}{}{}", self.delimiters.0, s, self.delimiters.1)
    }

    /// Displayable rendering of an expression in this notation (without delimiters)
    pub fn display<'b>(&'b self, expr: &'b Expr) -> Rendered<'b>
    where
        'a: 'b,
    {
        Rendered {
            expr,
            notation: self,
        }
    }

    /// Render an expression in this notation (without delimiters)
    pub fn render(&self, expr: &Expr) -> String {
        self.display(expr).to_string()
    }

    /// Render an expression in this notation, enclosed in the delimiters
    pub fn render_delimited(&self, expr: &Expr) -> String {
        self.delimit(&self.render(expr))
    }
}

impl Default for Notation<'_> {
    fn default() -> Self {
        PLAIN_NOTATION
    }
}

/// Formatter writing operators with the glyphs of a [Notation].
pub struct NotationFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>, &'a Notation<'a>);

impl<'a, 'b> NotationFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>, notation: &'a Notation<'a>) -> Self {
        Self(f, notation)
    }
}

impl ExprFormatter for NotationFormatter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_operator(&mut self, op: Operator) -> fmt::Result {
        write!(self, "{}", self.1.symbol(op))
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = NotationFormatter::new(f, self.notation);
        self.expr.fmt_with(&mut ef)
    }
}

#[cfg(test)]
mod tests {
    use crate::efmt::*;
    use crate::*;
    use test_log::test;

    #[test]
    fn plain_and_latex() -> Result<(), FormulaError> {
        let expr: Expr = "!A && (B || C)".parse()?;
        assert_eq!(PLAIN_NOTATION.render(&expr), "¬A ∧ (B ∨ C)");
        assert_eq!(PLAIN_NOTATION.render_delimited(&expr), "¬A ∧ (B ∨ C)");
        assert_eq!(
            LATEX_NOTATION.render_delimited(&expr),
            "$\\neg A \\land (B \\lor C)$"
        );

        // Implication binds tighter than conjunction
        let expr: Expr = "!A && (B -> C)".parse()?;
        assert_eq!(PLAIN_NOTATION.render(&expr), "¬A ∧ B ⇒ C");

        let expr: Expr = "a <-> 1 || b".parse()?;
        assert_eq!(LATEX_NOTATION.render(&expr), "A \\Leftrightarrow 1 \\lor B");
        Ok(())
    }

    #[test]
    fn parenthesis_only_when_needed() -> Result<(), FormulaError> {
        for (input, expected) in [
            ("A || B && C", "A ∨ B ∧ C"),
            ("(A || B) && C", "(A ∨ B) ∧ C"),
            ("((A))", "A"),
            ("!(A)", "¬A"),
            ("!(!A || B)", "¬(¬A ∨ B)"),
            ("A && B && C", "A ∧ B ∧ C"),
            ("A && (B && C)", "A ∧ (B ∧ C)"),
            ("A -> B <-> C", "(A ⇒ B) ⇔ C"),
            ("A <-> B -> C", "A ⇔ B ⇒ C"),
            ("(A || B) -> C", "(A ∨ B) ⇒ C"),
        ] {
            let expr: Expr = input.parse()?;
            assert_eq!(expr.to_string(), expected, "rendering '{}'", input);
        }
        Ok(())
    }

    #[test]
    fn custom_notation() -> Result<(), FormulaError> {
        let words = Notation::new("not ", " eq ", " implies ", " and ", " or ").with_delimiters("[", "]");
        let expr: Expr = "!(A || B) -> C".parse()?;
        assert_eq!(words.render(&expr), "not (A or B) implies C");
        assert_eq!(words.render_delimited(&expr), "[not (A or B) implies C]");
        assert_eq!(format!("{}", words.display(&expr)), words.render(&expr));
        Ok(())
    }
}
