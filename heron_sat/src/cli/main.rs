//! The command line interface to the solver.
//!
//! Reads a DIMACS CNF instance (optionally gzipped), solves it, and prints the
//! status among `c` comment lines, with a `v` line for the model when one is
//! found.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
    time::Duration,
};

use clap::Parser;
use flate2::read::GzDecoder;

use heron_sat::{config::Config, reports::Report, solver::Solver};

#[derive(Parser)]
#[command(name = "heron_sat", version, about = "A CDCL SAT solver")]
struct Args {
    /// Read the instance through a gzip decoder.
    /// Implied by a `.gz` extension.
    #[arg(long)]
    gzip: bool,

    /// Abandon the solve after this many conflicts.
    #[arg(long)]
    max_conflicts: Option<u64>,

    /// Abandon the solve after this many seconds.
    #[arg(long)]
    timeout: Option<f64>,

    /// Enable phase saving: decisions re-assert the last value a variable held.
    #[arg(long)]
    phase: bool,

    /// The DIMACS CNF instance to solve.
    instance: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config {
        phase_saving: args.phase,
        max_conflicts: args.max_conflicts,
        ..Config::default()
    };
    if let Some(seconds) = args.timeout {
        config.time_limit = Some(Duration::from_secs_f64(seconds));
    }

    let file = match File::open(&args.instance) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("c could not open {:?}: {e}", args.instance);
            std::process::exit(1);
        }
    };

    let gzipped = args.gzip
        || args
            .instance
            .extension()
            .is_some_and(|extension| extension == "gz");

    let reader: Box<dyn BufRead> = match gzipped {
        true => Box::new(BufReader::new(GzDecoder::new(file))),
        false => Box::new(BufReader::new(file)),
    };

    let mut solver = Solver::new(config);
    let info = match solver.read_dimacs(reader) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("c could not parse {:?}: {e}", args.instance);
            std::process::exit(1);
        }
    };

    println!("c variables:  {}", solver.variable_count());
    println!("c clauses:    {}", info.added_clauses);

    let report = solver.solve();

    let counters = &solver.counters;
    let elapsed = counters.elapsed_seconds();
    println!("c time (sec): {elapsed:.3}");
    println!(
        "c conflicts:  {} ({:.2} /sec)",
        counters.conflicts,
        counters.conflicts as f64 / elapsed.max(f64::MIN_POSITIVE),
    );
    println!("c decisions:  {}", counters.decisions);
    println!("c propagations: {}", counters.propagations);
    println!("c restarts:   {}", counters.restarts);
    println!("c guard hits: {}", counters.guard_hits);
    println!(
        "c avg conflict level: {:.2}",
        counters.avg_conflict_level.value(),
    );

    println!("{report}");

    if report == Report::Satisfiable {
        if let Some(model) = solver.models.last() {
            let values = model
                .iter()
                .enumerate()
                .map(|(variable, &value)| {
                    let index = (variable + 1) as i64;
                    match value {
                        true => index.to_string(),
                        false => (-index).to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            println!("v {values} 0");
        }
    }
}
