use clap::Parser;
use log::info;

use proptable::{Formula, TableConfig, DEFAULT_MAX_PROPOSITIONS, LATEX_NOTATION, PLAIN_NOTATION};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Propositional formula, for example "A && (B -> !C)".
    #[arg(value_name = "FORMULA")]
    formula: String,

    /// Name the columns with LaTeX math instead of plain symbols.
    #[clap(long)]
    latex: bool,

    /// Maximal number of free propositions.
    #[clap(long, value_name = "INT", default_value_t = DEFAULT_MAX_PROPOSITIONS)]
    max_propositions: usize,

    /// Symbols used for the false and true values.
    #[clap(long, value_name = "PAIR", default_value = "01", value_parser = parse_symbols)]
    symbols: String,

    /// List the operations of the formula before the table.
    #[clap(long)]
    operations: bool,
}

fn parse_symbols(s: &str) -> Result<String, String> {
    match s.len() {
        2 if s.is_ascii() => Ok(s.to_string()),
        _ => Err("expected two ASCII characters, for example \"FT\"".to_string()),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    info!("args = {:?}", args);

    let formula = match Formula::parse(&args.formula) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("{}", args.formula);
            if let proptable::FormulaError::Invalid(v) = &e {
                eprintln!("{}^", " ".repeat(v.position()));
            }
            return Err(e.into());
        }
    };

    let notation = if args.latex { &LATEX_NOTATION } else { &PLAIN_NOTATION };
    println!("formula: {}", formula.render_delimited(notation));

    if args.operations {
        for operation in formula.operations(notation) {
            println!("- {}", operation);
        }
    }

    let config = TableConfig::default()
        .with_notation(notation)
        .with_max_propositions(args.max_propositions);
    let table = formula.truth_table_with(&config)?;
    info!("{} rows, {} columns", table.rows_count(), table.columns_count());

    println!("{}", table.render_with([&args.symbols[0..1], &args.symbols[1..2]]));
    Ok(())
}
