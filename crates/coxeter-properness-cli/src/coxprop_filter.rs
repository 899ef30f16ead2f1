//! Proper word filter CLI
//!
//! Usage: coxprop_filter --type <LETTER> --rank <N> --in-file <PATH> --out-file <PATH>
//!
//! Reads one word per line (every decimal digit is one generator index) and
//! writes the proper words, one per line, in input order.
//!
//! Example:
//!   coxprop_filter --type E --rank 6 --in-file e6_words.txt --out-file e6_proper.txt
//!   coxprop_filter --type I --rank 2 --dihedral-order 7 --in-file i7.txt --out-file out.txt

use anyhow::{Context, Result};
use clap::Parser;
use coxeter_properness::app::filter::filter_file;
use coxeter_properness::{
    CartanFamily, CoxeterGroup, DEFAULT_BATCH_SIZE, FilterEvent, FilterOptions, FilterStats,
    ProperClassifier, SkipReason,
};
use std::path::PathBuf;
use std::time::Instant;

/// Filter the proper elements of a finite Coxeter group from a word list.
#[derive(Parser, Debug)]
#[command(name = "coxprop_filter", version)]
struct Args {
    /// Cartan type letter (A, B, D, E, F, G, H, I)
    #[arg(long = "type", value_name = "LETTER")]
    family: CartanFamily,

    /// Group rank (1-9)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rank: u32,

    /// File to read words from
    #[arg(long, value_name = "PATH")]
    in_file: PathBuf,

    /// File to write proper words to
    #[arg(long, value_name = "PATH")]
    out_file: PathBuf,

    /// Edge label m of I_2(m) (type I only)
    #[arg(long, value_name = "M")]
    dihedral_order: Option<u32>,

    /// Skip words that are not reduced expressions
    #[arg(long)]
    require_reduced: bool,

    /// Classify lines in parallel batches of this size (0 = sequential)
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

fn describe_skip(line_number: u64, line: &str, reason: &SkipReason) -> String {
    match reason {
        SkipReason::Unparsable => format!("could not parse line {} '{}'", line_number, line),
        _ => format!("skipped line {} '{}': {}", line_number, line, reason),
    }
}

fn print_summary(stats: &FilterStats) {
    println!("Lines processed: {}", stats.lines);
    println!("  proper:      {}", stats.accepted);
    println!("  not proper:  {}", stats.rejected);
    if stats.skipped() > 0 {
        println!(
            "  skipped:     {} (unparsable {}, out of range {}, not reduced {})",
            stats.skipped(),
            stats.unparsable,
            stats.invalid,
            stats.not_reduced
        );
    }
}

fn run(args: Args) -> Result<()> {
    let group = CoxeterGroup::new(args.family, args.rank, args.dihedral_order)
        .with_context(|| format!("Cannot build group {}{}", args.family, args.rank))?;
    let classifier = ProperClassifier::new(group);

    let options = match args.batch_size {
        0 => FilterOptions::sequential(),
        n => FilterOptions::parallel(n),
    }
    .with_require_reduced(args.require_reduced);

    println!(
        "Filtering {} for type {}{}...",
        args.in_file.display(),
        args.family,
        args.rank
    );
    let start = Instant::now();

    let stats = filter_file(
        &args.in_file,
        &args.out_file,
        &classifier,
        &options,
        |event| match event {
            FilterEvent::Progress { lines } => println!("processed: {}", lines),
            FilterEvent::Skipped {
                line_number,
                line,
                reason,
            } => eprintln!("{}", describe_skip(line_number, &line, &reason)),
        },
    )?;

    print_summary(&stats);
    println!(
        "Done in {:.2} seconds. Output: {}",
        start.elapsed().as_secs_f64(),
        args.out_file.display()
    );

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
