//! Formulas parsed from user input

use crate::{
    build, operations, tokenize, validate, Expr, FormulaError, Notation, Operation, TableConfig,
    TruthTable, ValidationError, LATEX_NOTATION,
};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// A formula typed by a user: the source string and its expression tree.
///
/// A blank source gives an empty formula, without tree. It is not an error: its truth table
/// is simply empty and its renderings are empty strings.
///
/// ```
/// use proptable::Formula;
/// # use proptable::FormulaError;
/// # fn main() -> Result<(), FormulaError> {
///
/// let formula = Formula::parse("!a -> (b || a)")?;
/// assert_eq!(formula.to_string(), "¬A ⇒ (B ∨ A)");
/// assert_eq!(formula.to_latex(), "$\\neg A \\Rightarrow (B \\lor A)$");
/// assert_eq!(formula.propositions(), vec!["A", "B"]);
///
/// let table = formula.truth_table()?;
/// assert_eq!(table.rows_count(), 4);
///
/// assert!(Formula::parse("   ")?.is_empty());
/// assert!(Formula::parse("a -> ").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Formula {
    source: String,
    tree: Option<Expr>,
}

impl Formula {
    /// Validate and parse a formula.
    ///
    /// Proposition names are case-insensitive: they are converted to uppercase.
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        if source.trim_matches(' ').is_empty() {
            return Ok(Self {
                source: source.to_string(),
                tree: None,
            });
        }

        validate(source)?;
        let tokens = tokenize(&source.to_uppercase());
        let tree = build(&tokens);
        debug!("parsed formula {:?}", source);
        Ok(Self {
            source: source.to_string(),
            tree,
        })
    }

    /// Check the syntax of the source string, blank sources are reported as unexpected endings
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> Option<&Expr> {
        self.tree.as_ref()
    }

    pub fn into_tree(self) -> Option<Expr> {
        self.tree
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Free propositions, in order of first occurrence
    pub fn propositions(&self) -> Vec<String> {
        self.tree.as_ref().map(operations::propositions).unwrap_or_default()
    }

    /// Compound sub-expressions, named with the given notation
    pub fn operations(&self, notation: &Notation) -> Vec<Operation> {
        match &self.tree {
            None => Vec::new(),
            Some(expr) => operations::operations(expr, notation),
        }
    }

    /// Typeset rendering, enclosed in inline math delimiters
    pub fn to_latex(&self) -> String {
        self.render_delimited(&LATEX_NOTATION)
    }

    /// Render the formula with a custom notation, enclosed in its delimiters
    pub fn render_delimited(&self, notation: &Notation) -> String {
        match &self.tree {
            None => String::new(),
            Some(expr) => notation.render_delimited(expr),
        }
    }

    /// Build the truth table with the default configuration
    pub fn truth_table(&self) -> Result<TruthTable, FormulaError> {
        self.truth_table_with(&TableConfig::default())
    }

    pub fn truth_table_with(&self, config: &TableConfig) -> Result<TruthTable, FormulaError> {
        match &self.tree {
            None => Ok(TruthTable::empty()),
            Some(expr) => TruthTable::new(expr, config),
        }
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Plain rendering, empty for an empty formula
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tree {
            None => Ok(()),
            Some(expr) => write!(f, "{}", expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    #[test]
    fn empty_formula() -> Result<(), FormulaError> {
        for source in ["", "   "] {
            let formula = Formula::parse(source)?;
            assert!(formula.is_empty());
            assert_eq!(formula.to_string(), "");
            assert_eq!(formula.to_latex(), "");
            assert!(formula.propositions().is_empty());
            assert!(formula.operations(&PLAIN_NOTATION).is_empty());
            assert!(formula.validate().is_err());

            let table = formula.truth_table()?;
            assert!(table.is_empty());
            assert_eq!(table.rows_count(), 0);
            assert_eq!(table.columns_count(), 0);
        }
        Ok(())
    }

    #[test]
    fn invalid_formulas_have_no_tree() {
        assert_eq!(
            Formula::parse("(A && B"),
            Err(FormulaError::Invalid(ValidationError::UnclosedParenthesis { position: 7 }))
        );
        assert_eq!(
            "A # B".parse::<Formula>(),
            Err(FormulaError::Invalid(ValidationError::UnknownSymbol { symbol: '#', position: 2 }))
        );
        assert_eq!(
            Formula::parse("A && ").unwrap_err().to_string(),
            "Unexpected expression ending."
        );
    }

    #[test]
    fn case_insensitive() -> Result<(), FormulaError> {
        let lower = Formula::parse("a && !b")?;
        let upper = Formula::parse("A&&!B")?;
        assert_eq!(lower.tree(), upper.tree());
        assert_eq!(lower.source(), "a && !b");
        assert!(lower.validate().is_ok());
        Ok(())
    }

    #[test]
    fn latex_table() -> Result<(), FormulaError> {
        let formula = Formula::parse("A <-> !A")?;
        let table = formula.truth_table_with(&TableConfig::default().with_notation(&LATEX_NOTATION))?;
        assert_eq!(
            table.headers(),
            vec!["$A$", "$\\neg A$", "$A \\Leftrightarrow \\neg A$"]
        );
        assert_eq!(table.column("A \\Leftrightarrow \\neg A").unwrap().data(), &[false, false]);
        Ok(())
    }
}
