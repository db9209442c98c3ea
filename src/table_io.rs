use std::io;
use std::io::Write;

use serde::Serialize;

use crate::classify::Classification;
use crate::truth_table::{TruthTable, TruthValue};

/// Everything the JSON output contains for one formula.
#[derive(Debug, Serialize)]
pub struct TableReport<'a> {
    pub formula: &'a str,
    pub table: &'a TruthTable,
    pub classification: Classification,
}

fn header<'a>(table: &'a TruthTable, result_label: &'a str) -> Vec<&'a str> {
    table
        .vars()
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(result_label))
        .collect()
}

/// Writes an aligned text table; the result column is headed by `result_label`.
pub fn write_text<W: Write>(
    writer: &mut W,
    table: &TruthTable,
    result_label: &str,
) -> io::Result<()> {
    let header = header(table, result_label);

    let widths: Vec<usize> = header
        .iter()
        .map(|h| h.chars().count().max("False".len()))
        .collect();

    let cells = header.iter().zip(&widths).map(|(h, &w)| format!("{h:<w$}"));
    writeln!(writer, "{}", cells.collect::<Vec<_>>().join(" | ").trim_end())?;

    let rule = widths.iter().map(|w| "-".repeat(*w));
    writeln!(writer, "{}", rule.collect::<Vec<_>>().join("-+-"))?;

    for row in table.rows() {
        let cells = row
            .values
            .iter()
            .chain(std::iter::once(&row.result))
            .zip(&widths)
            .map(|(&v, &w)| format!("{:<w$}", TruthValue::from(v)));

        writeln!(writer, "{}", cells.collect::<Vec<_>>().join(" | ").trim_end())?;
    }

    Ok(())
}

/// Writes the table as CSV with `1`/`0` cells.
pub fn write_csv<W: Write>(writer: &mut W, table: &TruthTable, result_label: &str) -> io::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(header(table, result_label))?;

    for row in table.rows() {
        csv_writer.write_record(
            row.values
                .iter()
                .chain(std::iter::once(&row.result))
                .map(|&v| TruthValue::from(v).as_bit()),
        )?;
    }

    csv_writer.flush()?;

    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, report: &TableReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}
