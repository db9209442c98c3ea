use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Serialize;

use crate::error::ClassifyError;
use crate::truth_table::TruthTable;

/// Summary of a truth table's result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    /// True under every assignment
    Tautology,
    /// False under every assignment
    Contradiction,
    /// True under some assignments and false under others
    Contingent,
}

impl Classification {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::Tautology, Self::Contradiction, Self::Contingent]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::Tautology => matches!(s, "Tautology" | "tautology" | "taut"),
            Self::Contradiction => matches!(s, "Contradiction" | "contradiction" | "contra"),
            Self::Contingent => matches!(s, "Contingent" | "contingent" | "cont"),
        }
    }

    /// The key handed to callers of the boundary operations.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tautology => "Tautology",
            Self::Contradiction => "Contradiction",
            Self::Contingent => "Contingent",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("cannot parse {s} as classification"))
            .copied()
    }
}

/// Classifies a table by its result column alone; the formula is not re-evaluated.
pub fn classify(table: &TruthTable) -> Result<Classification, ClassifyError> {
    if table.is_empty() {
        return Err(ClassifyError::EmptyTable);
    }

    let (mut any_true, mut any_false) = (false, false);
    for result in table.results() {
        any_true |= result;
        any_false |= !result;
    }

    let classification = match (any_true, any_false) {
        (true, false) => Classification::Tautology,
        (false, true) => Classification::Contradiction,
        _ => Classification::Contingent,
    };

    log::debug!("{} rows classified as {}", table.len(), classification);

    Ok(classification)
}
