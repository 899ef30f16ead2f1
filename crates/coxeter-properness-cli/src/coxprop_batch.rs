//! Proper word filter CLI for directories
//!
//! Usage: coxprop_batch --type <LETTER> --rank <N> --in-dir <DIR> --out-dir <DIR>
//!
//! Every regular file in the input directory is filtered into a file of the
//! same name in the output directory. Files are processed in parallel.
//!
//! Example: coxprop_batch --type D --rank 6 --in-dir d6_parts --out-dir d6_proper

use anyhow::{Context, Result, bail};
use clap::Parser;
use coxeter_properness::app::batch::filter_directory;
use coxeter_properness::{
    CartanFamily, CoxeterGroup, FilterEvent, FilterOptions, FilterStats, ProperClassifier,
    SkipReason,
};
use std::path::PathBuf;
use std::time::Instant;

/// Filter the proper elements of a finite Coxeter group from a directory of word lists.
#[derive(Parser, Debug)]
#[command(name = "coxprop_batch", version)]
struct Args {
    /// Cartan type letter (A, B, D, E, F, G, H, I)
    #[arg(long = "type", value_name = "LETTER")]
    family: CartanFamily,

    /// Group rank (1-9)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rank: u32,

    /// Directory of word files
    #[arg(long, value_name = "DIR")]
    in_dir: PathBuf,

    /// Directory to write filtered files to
    #[arg(long, value_name = "DIR")]
    out_dir: PathBuf,

    /// Edge label m of I_2(m) (type I only)
    #[arg(long, value_name = "M")]
    dihedral_order: Option<u32>,

    /// Skip words that are not reduced expressions
    #[arg(long)]
    require_reduced: bool,

    /// Report skipped lines on stderr
    #[arg(long)]
    verbose: bool,
}

fn describe_skip(line_number: u64, line: &str, reason: &SkipReason) -> String {
    match reason {
        SkipReason::Unparsable => format!("{}: could not parse line '{}'", line_number, line),
        _ => format!("{}: skipped line '{}': {}", line_number, line, reason),
    }
}

fn run(args: Args) -> Result<()> {
    let group = CoxeterGroup::new(args.family, args.rank, args.dihedral_order)
        .with_context(|| format!("Cannot build group {}{}", args.family, args.rank))?;
    let classifier = ProperClassifier::new(group);
    let options = FilterOptions::sequential().with_require_reduced(args.require_reduced);

    println!(
        "Filtering {} into {} for type {}{}...",
        args.in_dir.display(),
        args.out_dir.display(),
        args.family,
        args.rank
    );
    let start = Instant::now();

    let reports = filter_directory(
        &args.in_dir,
        &args.out_dir,
        &classifier,
        &options,
        |path, event| {
            if let FilterEvent::Skipped {
                line_number,
                line,
                reason,
            } = event
                && args.verbose
            {
                eprintln!(
                    "{}:{}",
                    path.display(),
                    describe_skip(line_number, &line, &reason)
                );
            }
        },
    )?;

    let mut total = FilterStats::default();
    let mut failures = 0;
    for report in &reports {
        match &report.result {
            Ok(stats) => {
                println!(
                    "  {} -> {}: {} proper of {} lines",
                    report.input.display(),
                    report.output.display(),
                    stats.accepted,
                    stats.lines
                );
                total.merge(stats);
            }
            Err(e) => {
                eprintln!("  {}: Error: {}", report.input.display(), e);
                failures += 1;
            }
        }
    }

    println!(
        "Processed {} file(s), {} lines, {} proper, {} skipped in {:.2} seconds.",
        reports.len(),
        total.lines,
        total.accepted,
        total.skipped(),
        start.elapsed().as_secs_f64()
    );

    if failures > 0 {
        bail!("{} file(s) failed", failures);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
