//! Truth tables: one column per proposition and per compound sub-expression

use crate::operations::{self, Operand, Operation};
use crate::{Expr, FormulaError, Notation, PLAIN_NOTATION};

use delegate::delegate;
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Default limit on the number of free propositions of a truth table
pub const DEFAULT_MAX_PROPOSITIONS: usize = 20;

/// Settings used to build truth tables.
///
/// ```
/// use proptable::{TableConfig, LATEX_NOTATION};
///
/// let config = TableConfig::default()
///     .with_notation(&LATEX_NOTATION)
///     .with_max_propositions(8);
/// assert_eq!(config.max_propositions(), 8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TableConfig<'a> {
    notation: &'a Notation<'a>,
    max_propositions: usize,
}

/// A named column of Boolean values, one for each row of the table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Column {
    name: String,
    data: Vec<bool>,
}

/// Truth table of a formula.
///
/// For `n` free propositions, the table has `2^n` rows enumerating all assignments in ascending binary order,
/// the first proposition being the most significant bit. The proposition columns come first (in order of
/// first occurrence), followed by one column for each distinct compound sub-expression, in the order of
/// [operations::operations]. Identical sub-expressions share a single column.
///
/// A table without any column (empty formula or single literal) has no row.
#[derive(Clone, Debug)]
pub struct TruthTable {
    propositions: Vec<String>,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    rows: usize,
    delimiters: (String, String),
}

/// Resolved operand of an operation: a fixed value or the content of a column
#[derive(Clone, Copy)]
enum Values<'a> {
    Fixed(bool),
    Data(&'a [bool]),
}

impl<'a> TableConfig<'a> {
    pub fn with_notation(mut self, notation: &'a Notation<'a>) -> Self {
        self.notation = notation;
        self
    }

    pub fn with_max_propositions(mut self, max_propositions: usize) -> Self {
        self.max_propositions = max_propositions;
        self
    }

    pub fn notation(&self) -> &'a Notation<'a> {
        self.notation
    }

    pub fn max_propositions(&self) -> usize {
        self.max_propositions
    }
}

impl Default for TableConfig<'_> {
    fn default() -> Self {
        Self {
            notation: &PLAIN_NOTATION,
            max_propositions: DEFAULT_MAX_PROPOSITIONS,
        }
    }
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }
}

impl Values<'_> {
    fn at(self, row: usize) -> bool {
        match self {
            Values::Fixed(b) => b,
            Values::Data(data) => data[row],
        }
    }
}

impl TruthTable {
    /// An empty table, without rows or columns
    pub fn empty() -> Self {
        Self {
            propositions: Vec::new(),
            columns: Vec::new(),
            index: HashMap::new(),
            rows: 0,
            delimiters: (String::new(), String::new()),
        }
    }

    /// Build the truth table of an expression.
    ///
    /// Returns an error if the expression has more free propositions than allowed by the configuration.
    ///
    /// # Panics
    ///
    /// Panics if an operation refers to a column which has not been computed yet, which can not happen
    /// for operations listed in post-order.
    pub fn new(expr: &Expr, config: &TableConfig) -> Result<Self, FormulaError> {
        let propositions = operations::propositions(expr);
        if propositions.len() > config.max_propositions {
            return Err(FormulaError::TooManyPropositions {
                count: propositions.len(),
                limit: config.max_propositions,
            });
        }

        let notation = config.notation;
        let mut table = Self::empty();
        let (open, close) = notation.delimiters();
        table.delimiters = (open.to_string(), close.to_string());
        table.rows = 1 << propositions.len();
        table.generate_proposition_columns(&propositions);
        table.propositions = propositions;
        for operation in operations::operations(expr, notation) {
            table.add_column(operation);
        }
        if table.columns.is_empty() {
            table.rows = 0;
        }

        debug!(
            "truth table: {} propositions, {} rows, {} columns",
            table.propositions.len(),
            table.rows,
            table.columns.len()
        );
        Ok(table)
    }

    fn generate_proposition_columns(&mut self, propositions: &[String]) {
        let n = propositions.len();
        for (i, name) in propositions.iter().enumerate() {
            let period = 1usize << (n - i);
            let half = period >> 1;
            let data = (0..self.rows).map(|row| row % period >= half).collect();
            self.push_column(name.clone(), data);
        }
    }

    /// Compute the column of an operation, unless a column with the same name exists
    fn add_column(&mut self, operation: Operation) {
        if self.index.contains_key(&operation.name) {
            debug!("reuse column '{}'", &operation.name);
            return;
        }

        let left = self.resolve(&operation.left);
        let right = operation.right.as_ref().map(|r| self.resolve(r));
        let data = (0..self.rows)
            .map(|row| {
                let b = right.map_or(false, |r| r.at(row));
                operation.operator.apply(left.at(row), b)
            })
            .collect();

        debug!("add column {}", &operation);
        self.push_column(operation.name, data);
    }

    fn resolve(&self, operand: &Operand) -> Values {
        match operand {
            Operand::Literal(b) => Values::Fixed(*b),
            Operand::Column(name) => match self.column(name) {
                Some(column) => Values::Data(&column.data),
                None => panic!("The column '{}' is used before being computed", name),
            },
        }
    }

    fn push_column(&mut self, name: String, data: Vec<bool>) {
        self.index.insert(name.clone(), self.columns.len());
        self.columns.push(Column { name, data });
    }

    delegate! {
        to self.columns {
            /// Test if the table has no column at all
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn rows_count(&self) -> usize {
        self.rows
    }

    pub fn columns_count(&self) -> usize {
        self.columns.len()
    }

    /// Free propositions, in the order of their columns
    pub fn propositions(&self) -> &[String] {
        &self.propositions
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|i| &self.columns[*i])
    }

    /// Names of all columns, enclosed in the delimiters of the notation used to build the table
    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| format!("{}{}{}", self.delimiters.0, c.name, self.delimiters.1))
            .collect()
    }

    /// Values of all columns in a row.
    ///
    /// # Panics
    ///
    /// Panics if the row is out of bounds.
    pub fn row(&self, row: usize) -> Vec<bool> {
        assert!(row < self.rows, "Row {} is out of bounds ({} rows)", row, self.rows);
        self.columns.iter().map(|c| c.data[row]).collect()
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Display the table as text, using custom symbols for the false and true values.
    pub fn render_with(&self, symbols: [&str; 2]) -> String {
        let mut lines = Vec::with_capacity(self.rows + 1);
        if !self.is_empty() {
            lines.push(self.columns.iter().map(|c| c.name.as_str()).join(" | "));
        }
        for row in self.rows() {
            let widths = self.columns.iter().map(|c| c.name.chars().count());
            let cells = row
                .into_iter()
                .zip(widths)
                .map(|(b, w)| format!("{:^w$}", symbols[b as usize], w = w))
                .join(" | ");
            lines.push(cells);
        }
        lines.join("\n")
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_with(["0", "1"]))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    fn table(s: &str) -> Result<TruthTable, FormulaError> {
        let expr: Expr = s.parse()?;
        TruthTable::new(&expr, &TableConfig::default())
    }

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn proposition_columns() -> Result<(), FormulaError> {
        let t = table("A && B || C")?;
        assert_eq!(t.rows_count(), 8);
        assert_eq!(t.propositions(), &["A", "B", "C"]);
        assert_eq!(t.column("A").unwrap().data(), &bits("00001111")[..]);
        assert_eq!(t.column("B").unwrap().data(), &bits("00110011")[..]);
        assert_eq!(t.column("C").unwrap().data(), &bits("01010101")[..]);
        assert_eq!(t.column("A ∧ B").unwrap().data(), &bits("00000011")[..]);
        assert_eq!(t.column("A ∧ B ∨ C").unwrap().data(), &bits("01010111")[..]);
        Ok(())
    }

    #[test]
    fn operator_columns() -> Result<(), FormulaError> {
        let t = table("A -> B")?;
        assert_eq!(t.column("A ⇒ B").unwrap().data(), &bits("1101")[..]);
        let t = table("A <-> B")?;
        assert_eq!(t.column("A ⇔ B").unwrap().data(), &bits("1001")[..]);
        let t = table("A || B")?;
        assert_eq!(t.column("A ∨ B").unwrap().data(), &bits("0111")[..]);
        let t = table("!A")?;
        assert_eq!(t.column("¬A").unwrap().data(), &bits("10")[..]);
        Ok(())
    }

    #[test]
    fn literals() -> Result<(), FormulaError> {
        let t = table("A && 1 || 0")?;
        assert_eq!(t.propositions(), &["A"]);
        assert_eq!(t.column("A ∧ 1").unwrap().data(), &bits("01")[..]);
        assert_eq!(t.column("A ∧ 1 ∨ 0").unwrap().data(), &bits("01")[..]);

        let t = table("1 -> 0")?;
        assert_eq!(t.rows_count(), 1);
        assert_eq!(t.headers(), vec!["1 ⇒ 0"]);
        assert_eq!(t.row(0), vec![false]);

        // A bare literal has no column
        let t = table("1")?;
        assert!(t.is_empty());
        assert_eq!(t.rows_count(), 0);
        Ok(())
    }

    #[test]
    fn memoized_columns() -> Result<(), FormulaError> {
        let t = table("(A&&B) || (A&&B)")?;
        let headers = t.headers();
        assert_eq!(headers, vec!["A", "B", "A ∧ B", "A ∧ B ∨ A ∧ B"]);
        assert_eq!(t.columns_count(), 4);

        let t = table("!A && !A")?;
        assert_eq!(t.headers(), vec!["A", "¬A", "¬A ∧ ¬A"]);

        // Differently associated implications keep separate columns
        let t = table("(A -> (B -> C)) || ((A -> B) -> C)")?;
        assert_eq!(
            t.headers(),
            vec![
                "A",
                "B",
                "C",
                "B ⇒ C",
                "A ⇒ (B ⇒ C)",
                "A ⇒ B",
                "A ⇒ B ⇒ C",
                "A ⇒ (B ⇒ C) ∨ A ⇒ B ⇒ C",
            ]
        );
        assert_eq!(t.column("A ⇒ (B ⇒ C)").unwrap().data(), &bits("11111101")[..]);
        assert_eq!(t.column("A ⇒ B ⇒ C").unwrap().data(), &bits("01011101")[..]);
        Ok(())
    }

    #[test]
    fn columns_agree_with_evaluation() -> Result<(), FormulaError> {
        let expr: Expr = "!(A -> B) <-> C || (B && !A) || 1 && C".parse()?;
        let t = TruthTable::new(&expr, &TableConfig::default())?;
        let formula = t.column(&expr.to_string()).unwrap();
        for row in 0..t.rows_count() {
            let value = |p: &str| t.column(p).unwrap().data()[row];
            assert_eq!(formula.data()[row], expr.eval(&value), "row {}", row);
        }
        Ok(())
    }

    #[test]
    fn latex_headers() -> Result<(), FormulaError> {
        let expr: Expr = "A && !B".parse()?;
        let config = TableConfig::default().with_notation(&LATEX_NOTATION);
        let t = TruthTable::new(&expr, &config)?;
        assert_eq!(t.headers(), vec!["$A$", "$B$", "$\\neg B$", "$A \\land \\neg B$"]);
        assert!(t.column("A \\land \\neg B").is_some());
        Ok(())
    }

    #[test]
    fn proposition_limit() -> Result<(), FormulaError> {
        let expr: Expr = "A && B && C".parse()?;
        let config = TableConfig::default().with_max_propositions(2);
        assert_eq!(
            TruthTable::new(&expr, &config).unwrap_err(),
            FormulaError::TooManyPropositions { count: 3, limit: 2 }
        );
        assert!(TruthTable::new(&expr, &config.with_max_propositions(3)).is_ok());
        Ok(())
    }

    #[test]
    fn rows_and_text() -> Result<(), FormulaError> {
        let t = table("A && B")?;
        let rows: Vec<Vec<bool>> = t.rows().collect();
        assert_eq!(
            rows,
            vec![
                bits("000"),
                bits("010"),
                bits("100"),
                bits("111"),
            ]
        );
        assert_eq!(t.to_string(), "A | B | A ∧ B\n0 | 0 |   0  \n0 | 1 |   0  \n1 | 0 |   0  \n1 | 1 |   1  ");
        assert_eq!(TruthTable::empty().to_string(), "");
        Ok(())
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds() {
        table("A").unwrap().row(2);
    }
}
