use std::io::{BufReader, Write};

use flate2::{write::GzEncoder, Compression};

use heron_sat::{config::Config, reports::Report, solver::Solver};

const CASCADE: &str = "\
c three forced variables
p cnf 3 3
1 0
-1 2 0
-2 3 0
";

#[test]
fn a_formula_is_read_and_solved() {
    let mut solver = Solver::new(Config::default());

    let info = solver.read_dimacs(CASCADE.as_bytes()).unwrap();
    assert_eq!(info.expected_variables, 3);
    assert_eq!(info.added_clauses, 3);

    assert_eq!(solver.solve(), Report::Satisfiable);
    assert_eq!(solver.models.last(), Some(&vec![true, true, true]));
}

#[test]
fn gzip_round_trip_yields_the_same_model() {
    // Plain solve.
    let mut plain = Solver::new(Config::default());
    plain.read_dimacs(CASCADE.as_bytes()).unwrap();
    assert_eq!(plain.solve(), Report::Satisfiable);

    // The same instance through a gzip encoder and decoder.
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(CASCADE.as_bytes()).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut gzipped = Solver::new(Config::default());
    let decoder = flate2::read::GzDecoder::new(compressed.as_slice());
    gzipped.read_dimacs(BufReader::new(decoder)).unwrap();
    assert_eq!(gzipped.solve(), Report::Satisfiable);

    assert_eq!(plain.models, gzipped.models);
}

#[test]
fn unsatisfiability_survives_parsing() {
    let mut solver = Solver::new(Config::default());

    let dimacs = "p cnf 1 2\n1 0\n-1 0\n";
    assert!(solver.read_dimacs(dimacs.as_bytes()).is_ok());
    assert!(solver.is_unsat());
    assert_eq!(solver.solve(), Report::Unsatisfiable);
}
