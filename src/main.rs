use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use rsprop::parser_io::FormulaParseTree;
use rsprop::table_io::{self, TableReport};
use rsprop::{classify, generate_table_bounded, ParsedFormula};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

// 2^20 rows, interactive use rarely wants more
const DEFAULT_MAX_VARIABLES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned text table followed by the classification
    Table,
    /// Comma separated values with 1/0 cells
    Csv,
    /// A single JSON document with the table and its classification
    Json,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "FORMULA")]
    /// The formula to evaluate, e.g. "p -> (q | !p)"
    formula: Option<String>,

    #[clap(short, long, value_parser, value_name = "FILE", conflicts_with = "formula")]
    /// Read the formula from a file instead ('-' for stdin)
    input: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value_t = OutputFormat::Table, env = "RSPROP_FORMAT")]
    /// Output format of the truth table
    format: OutputFormat,

    #[clap(short, long)]
    /// Only print the classification
    type_only: bool,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// Write the parse tree to FILE in dot (GraphViz) format
    dot: Option<PathBuf>,

    #[clap(long, value_name = "N", default_value_t = DEFAULT_MAX_VARIABLES, env = "RSPROP_MAX_VARS")]
    /// Refuse formulas with more than N distinct variables
    max_vars: usize,

    #[clap(short, long, action = ArgAction::Count)]
    /// Increase log verbosity (repeatable)
    verbose: u8,
}

fn read_formula(args: &Args) -> anyhow::Result<String> {
    match (&args.formula, &args.input) {
        (Some(formula), _) => Ok(formula.clone()),
        (None, Some(path)) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        (None, _) => {
            let mut src = String::new();
            io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    init_logger(args.verbose);

    let src = read_formula(&args)?;
    let parsed = ParsedFormula::new(&src)?;

    if let Some(dot_path) = &args.dot {
        let mut f = File::create(dot_path)?;
        FormulaParseTree::new(&parsed.formula).render_dot(&mut f)?;
        log::info!("wrote parse tree to {}", dot_path.display());
    }

    let table = generate_table_bounded(&parsed.formula, &parsed.vars, args.max_vars)?;
    let classification = classify(&table)?;

    let mut writer = BufWriter::new(io::stdout());

    if args.type_only {
        writeln!(writer, "{}", classification)?;
    } else {
        match args.format {
            OutputFormat::Table => {
                table_io::write_text(&mut writer, &table, &parsed.source)?;
                writeln!(writer)?;
                writeln!(writer, "{}", classification)?;
            }
            OutputFormat::Csv => table_io::write_csv(&mut writer, &table, &parsed.source)?,
            OutputFormat::Json => table_io::write_json(
                &mut writer,
                &TableReport {
                    formula: &parsed.source,
                    table: &table,
                    classification,
                },
            )?,
        }
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}
