use std::fmt::{self, Display};

/// Lexical unit of a propositional formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Var(String),
    And,
    Or,
    Not,
    Implies,
    Iff,
    OpenParen,
    CloseParen,
    End,
}

/// A token together with the character offset at which it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

impl SpannedToken {
    pub const fn new(token: Token, position: usize) -> Self {
        Self { token, position }
    }
}

impl Token {
    /// Whether this token joins or negates sub-formulas.
    pub const fn is_connective(&self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Not | Self::Implies | Self::Iff
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => f.pad(name),
            Self::And => f.pad("&"),
            Self::Or => f.pad("|"),
            Self::Not => f.pad("!"),
            Self::Implies => f.pad("->"),
            Self::Iff => f.pad("<->"),
            Self::OpenParen => f.pad("("),
            Self::CloseParen => f.pad(")"),
            Self::End => f.pad("end of input"),
        }
    }
}
