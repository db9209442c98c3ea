use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Serialize, Serializer};

use crate::error::EvalError;
use crate::eval::Assignment;
use crate::parser::Formula;

/// Key under which a row's evaluated result is stored in its record form.
pub const RESULT_KEY: &str = "result";

/// Upper bound on the estimated heap size of a generated table, in bytes.
pub const MAX_TABLE_BYTES: u64 = 1 << 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Single cell of a truth table.
///
/// Wraps a boolean so it can be displayed with padding and parsed from the usual spellings.
pub enum TruthValue {
    True,
    False,
}

impl TruthValue {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::True, Self::False]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::True => matches!(s, "true" | "True" | "t" | "T" | "1"),
            Self::False => matches!(s, "false" | "False" | "f" | "F" | "0"),
        }
    }

    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    pub const fn as_bit(self) -> &'static str {
        match self {
            Self::True => "1",
            Self::False => "0",
        }
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::True => "True",
            Self::False => "False",
        })
    }
}

impl FromStr for TruthValue {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("cannot parse {s} as truth value"))
            .copied()
    }
}

/// One assignment, positionally aligned with [`TruthTable::vars`], and the formula's value under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    pub values: Vec<bool>,
    pub result: bool,
}

/// Complete enumeration of a formula's assignments.
///
/// Columns are the sorted variables. Row 0 assigns every variable true and the last row
/// assigns every variable false; in between, rows count down in binary with the first
/// variable as the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TruthTable {
    vars: Vec<String>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Assembles a table from parts supplied by a caller, without checking them against any formula.
    pub const fn new(vars: Vec<String>, rows: Vec<TruthTableRow>) -> Self {
        Self { vars, rows }
    }

    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// Looks up a cell by row index and column name; [`RESULT_KEY`] names the result column.
    pub fn value(&self, row: usize, name: &str) -> Option<bool> {
        let row = self.rows.get(row)?;

        if name == RESULT_KEY {
            return Some(row.result);
        }

        self.vars
            .iter()
            .position(|v| v == name)
            .and_then(|i| row.values.get(i).copied())
    }

    /// The rows as flat maps from variable name (and [`RESULT_KEY`]) to value.
    pub fn records(&self) -> Vec<BTreeMap<String, bool>> {
        self.rows
            .iter()
            .map(|row| {
                self.vars
                    .iter()
                    .cloned()
                    .zip(row.values.iter().copied())
                    .chain(std::iter::once((RESULT_KEY.to_string(), row.result)))
                    .collect()
            })
            .collect()
    }
}

impl Serialize for TruthTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}

/// Enumerates every assignment of `vars` and evaluates `formula` under each.
///
/// `vars` is sorted and deduplicated first, so the column and row order never depend on the
/// order the caller supplies. The variable count is only limited by [`MAX_TABLE_BYTES`].
pub fn generate_table(formula: &Formula, vars: &[String]) -> Result<TruthTable, EvalError> {
    generate_table_bounded(formula, vars, usize::MAX)
}

// rows times the size of one row including its heap-allocated values, None on overflow
fn table_bytes(n: usize) -> Option<u64> {
    let rows = 1u64.checked_shl(u32::try_from(n).ok()?)?;
    let row = u64::try_from(std::mem::size_of::<TruthTableRow>().checked_add(n)?).ok()?;

    rows.checked_mul(row)
}

/// [`generate_table`] with an explicit bound on the number of variables.
pub fn generate_table_bounded(
    formula: &Formula,
    vars: &[String],
    limit: usize,
) -> Result<TruthTable, EvalError> {
    let mut vars = vars.to_vec();
    vars.sort();
    vars.dedup();

    let n = vars.len();
    if n > limit {
        return Err(EvalError::TooManyVariables { count: n, limit });
    }

    let too_large = EvalError::TableTooLarge {
        count: n,
        limit: MAX_TABLE_BYTES,
    };

    let row_count = match table_bytes(n) {
        Some(bytes) if bytes <= MAX_TABLE_BYTES => 1usize << n,
        _ => return Err(too_large),
    };

    let mut rows = Vec::new();
    if rows.try_reserve_exact(row_count).is_err() {
        return Err(too_large);
    }

    let mut assignment: Assignment = vars.iter().map(|v| (v.clone(), false)).collect();

    for counter in (0..row_count).rev() {
        let values: Vec<bool> = (0..n).map(|i| (counter >> (n - 1 - i)) & 1 == 1).collect();

        for (var, &value) in vars.iter().zip(&values) {
            if let Some(slot) = assignment.get_mut(var) {
                *slot = value;
            }
        }

        let result = formula.eval(&assignment)?;

        log::trace!("row {:?} => {}", values, result);

        rows.push(TruthTableRow { values, result });
    }

    log::debug!("generated {} rows over {} variables", rows.len(), n);

    Ok(TruthTable { vars, rows })
}
