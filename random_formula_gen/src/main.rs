use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Symbols {
    /// ! & | -> <->
    Ascii,
    /// ¬ ∧ ∨ → ↔
    Unicode,
    /// not and or implies iff
    Words,
}

impl Symbols {
    const fn not(self) -> &'static str {
        match self {
            Self::Ascii => "!",
            Self::Unicode => "¬",
            Self::Words => "not ",
        }
    }

    const fn binary(self) -> [&'static str; 4] {
        match self {
            Self::Ascii => ["&", "|", "->", "<->"],
            Self::Unicode => ["∧", "∨", "→", "↔"],
            Self::Words => ["and", "or", "implies", "iff"],
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "VARIABLES")]
    /// The number of distinct variables available to each formula
    variables: usize,

    #[clap(short = 'n', long, value_parser, default_value_t = 1)]
    /// The number of formulas to generate
    count: usize,

    #[clap(long, value_parser, default_value_t = 4)]
    /// The maximum nesting depth of connectives
    depth: usize,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = Symbols::Ascii)]
    /// The spelling of the connectives
    symbols: Symbols,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.variables == 0 {
        Err(anyhow::anyhow!("Must provide at least one variable"))?
    }

    let vars = (0..args.variables)
        .map(|i| format!("p{}", i))
        .collect::<Vec<String>>();

    let mut rng = rand::thread_rng();

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    for _ in 0..args.count {
        let formula = generate_formula(&mut rng, &vars, args.depth, args.symbols)?;
        writeln!(writer, "{}", formula)?;
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

fn generate_formula<R: Rng>(
    rng: &mut R,
    vars: &[String],
    depth: usize,
    symbols: Symbols,
) -> anyhow::Result<String> {
    // leaves get more likely the deeper we are
    if depth == 0 || rng.gen_bool(1.0 / (depth as f64 + 1.0)) {
        let var = vars
            .choose(rng)
            .ok_or_else(|| anyhow::anyhow!("Cannot choose from an empty variable set"))?;

        return Ok(if rng.gen_bool(0.3) {
            format!("{}{}", symbols.not(), var)
        } else {
            var.clone()
        });
    }

    if rng.gen_bool(0.2) {
        let inner = generate_formula(rng, vars, depth - 1, symbols)?;
        return Ok(format!("{}({})", symbols.not(), inner));
    }

    let op = symbols.binary()[rng.gen_range(0..4)];
    let left = generate_formula(rng, vars, depth - 1, symbols)?;
    let right = generate_formula(rng, vars, depth - 1, symbols)?;

    Ok(format!("({} {} {})", left, op, right))
}
