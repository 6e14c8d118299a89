use thiserror::Error;

/// Rejection of a formula by the [validator](crate::validate).
///
/// Positions are 0-based character offsets in the original, space-preserving input.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ValidationError {
    /// The character is neither an operator, a parenthesis, a proposition nor a literal
    #[error("Unknown symbol '{symbol}' at {position}.")]
    UnknownSymbol { symbol: char, position: usize },

    /// A known symbol which can not follow the previous one
    #[error("Unexpected symbol '{symbol}' at {position}.")]
    UnexpectedSymbol { symbol: char, position: usize },

    /// The input ended inside a parenthesized group
    #[error("Not all open parentheses were closed.")]
    UnclosedParenthesis { position: usize },

    /// The input ended on an operator or an opening parenthesis (or was empty)
    #[error("Unexpected expression ending.")]
    UnexpectedEnding { position: usize },
}

impl ValidationError {
    /// Character offset of the offending symbol, or the input length for errors found at the end.
    pub fn position(&self) -> usize {
        match self {
            ValidationError::UnknownSymbol { position, .. }
            | ValidationError::UnexpectedSymbol { position, .. }
            | ValidationError::UnclosedParenthesis { position }
            | ValidationError::UnexpectedEnding { position } => *position,
        }
    }
}

/// Error raised while turning a string into a formula or a truth table.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum FormulaError {
    /// The formula is not syntactically valid
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The table would need more rows than allowed by the configuration
    #[error("Too many propositions for a truth table: {count} (limit is {limit})")]
    TooManyPropositions { count: usize, limit: usize },
}
