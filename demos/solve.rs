//! Classify the textbook exercise expressions (a)-(k).
//!
//! Run with: `cargo run --example solve -- --all`

use clap::Parser;
use log::info;

use truth_ops::combinators::{implied_by, implies, xor};
use truth_ops::{classify_all, lookup, OPERATIONS};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Also print the full table of 16 operations.
    #[arg(long)]
    all: bool,

    /// Increase log verbosity (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

type Expr = fn(bool, bool) -> bool;

const EXPRESSIONS: [(&str, Expr); 11] = [
    ("(a)", |a, b| implied_by(implies(a, b), b || b)),
    ("(b)", |a, b| implied_by(!a && !b, a || (b && !a))),
    ("(c)", |a, b| implies(a, implies(b, implies(a, implied_by(implied_by(b, a), b))))),
    ("(d)", |a, b| implies(a, b) && implies(b, a)),
    ("(e)", |a, b| implies(a, b) || implies(!b, !a)),
    ("(f)", |a, b| !a || b && b && a && !b || !b || !a && b),
    ("(g)", |a, b| xor(a, !b && !implies(b, !(a || b)))),
    ("(h)", |a, b| xor(implies(a, b), implies(!a, b))),
    ("(i)", |a, b| xor(implies(a, b), !implies(!a, b))),
    ("(j)", |a, b| implies(xor(a, b), b) || !implies(!a, b)),
    ("(k)", |a, b| implies(a, b) && implied_by(a, b) && (a && b)),
];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    info!("args = {:?}", args);

    if args.all {
        println!("--- Binary Logic Operations ---");
        for (id, entry) in OPERATIONS.iter().enumerate() {
            println!("{:2} {:04b} -> #{:<2} {}", id, id, entry.ordinal, entry.name);
        }
    }

    println!("--- Logic Expression Solutions ---");
    for res in classify_all(EXPRESSIONS) {
        // Go through the checked path so a bad id exits non-zero.
        let entry = lookup(res.table.id() as i64)?;
        println!("{} is equivalent to operation #{} ({})", res.label, entry.ordinal, entry.name);
    }
    println!("--------------------------------");

    Ok(())
}
