use std::fmt::{self, Display};

use thiserror::Error;

use crate::symbols::Token;

/// A character that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character '{unexpected}' at position {position}")]
pub struct LexError {
    pub position: usize,
    pub unexpected: char,
}

/// A structurally malformed formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `found` appeared where an operand or `)` was required; `after` is the preceding token.
    UnexpectedToken { found: Token, after: Option<Token> },
    UnbalancedParens,
    EmptyExpression,
    TrailingInput(Token),
    ReservedIdentifier(String),
    NestingTooDeep { limit: usize },
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Token::End,
                after: Some(op),
            } if op.is_connective() => write!(f, "missing operand after `{op}`"),
            Self::UnexpectedToken {
                found,
                after: Some(prev),
            } => write!(f, "unexpected `{found}` after `{prev}`"),
            Self::UnexpectedToken { found, after: None } => write!(f, "unexpected `{found}`"),
            Self::UnbalancedParens => write!(f, "unbalanced parentheses"),
            Self::EmptyExpression => write!(f, "empty expression"),
            Self::TrailingInput(token) => write!(f, "unexpected trailing `{token}`"),
            Self::ReservedIdentifier(name) => {
                write!(f, "'{name}' is reserved and cannot be used as a variable")
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "formula is nested more than {limit} levels deep")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("no value assigned to variable '{0}'")]
    UnboundVariable(String),

    #[error("formula has {count} distinct variables, at most {limit} are allowed")]
    TooManyVariables { count: usize, limit: usize },

    #[error("a truth table over {count} variables exceeds {limit} bytes")]
    TableTooLarge { count: usize, limit: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("cannot classify an empty truth table")]
    EmptyTable,
}

/// Any failure on the way from formula text to a classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("the supplied truth table does not belong to '{0}'")]
    InconsistentTable(String),
}
