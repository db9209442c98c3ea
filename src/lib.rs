#![warn(clippy::disallowed_types)]

pub use classify::{classify, Classification};
pub use error::*;
pub use parser::{Formula, ParsedFormula, MAX_NESTING_DEPTH};
pub use symbols::*;
pub use truth_table::{
    generate_table, generate_table_bounded, TruthTable, TruthTableRow, TruthValue,
    MAX_TABLE_BYTES, RESULT_KEY,
};

pub mod classify;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod parser_io;
pub mod table_io;

mod error;
mod symbols;
mod truth_table;

/// Parses `input` and enumerates its complete truth table.
///
/// The first lexing, parsing or evaluation failure is returned; a partial table is never produced.
pub fn get_table(input: &str) -> Result<TruthTable, FormulaError> {
    Ok(ParsedFormula::new(input)?.table()?)
}

/// Classifies the formula in `input`.
///
/// The table is re-derived from `input` rather than trusted. A `table` that does not match
/// the re-derived one is rejected with [`FormulaError::InconsistentTable`].
pub fn get_type(input: &str, table: &TruthTable) -> Result<Classification, FormulaError> {
    let formula = ParsedFormula::new(input)?;
    let derived = formula.table()?;

    if &derived != table {
        log::warn!("supplied table for '{}' does not match the formula", formula.source);
        return Err(FormulaError::InconsistentTable(formula.source));
    }

    Ok(classify(&derived)?)
}
