//! Solves every instance under `tests/instances/` and compares the full set
//! of models against the sibling `.cnf.models` file.
//!
//! Model files hold one model per line in DIMACS form; the expected sets were
//! established with reference solvers.

use std::{collections::HashSet, fs::File, io::BufReader, path::PathBuf};

use heron_sat::{
    builder::models::read_models,
    config::Config,
    reports::Report,
    solver::Solver,
    structures::literal::Literal,
};

fn instances_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
}

/// Enumerates every model of the solver's formula by blocking each model as it
/// is found.
fn solve_all(solver: &mut Solver) -> Vec<Vec<bool>> {
    while solver.solve() == Report::Satisfiable {
        let model = solver.models.last().unwrap();
        let blocking = model
            .iter()
            .enumerate()
            .map(|(variable, &value)| Literal::new(variable as u32, !value))
            .collect();
        if solver.add_clause(blocking).is_err() {
            break;
        }
    }
    solver.models.clone()
}

fn model_set(models: &[Vec<bool>]) -> HashSet<Vec<bool>> {
    models.iter().cloned().collect()
}

#[test]
fn every_instance_yields_its_model_set() {
    let directory = instances_directory();
    let mut checked = 0;

    for entry in std::fs::read_dir(&directory).expect("missing instance directory") {
        let path = entry.expect("unreadable instance directory").path();
        if path.extension().is_none_or(|extension| extension != "cnf") {
            continue;
        }

        let instance = File::open(&path).expect("unreadable instance");
        let mut solver = Solver::new(Config::default());
        solver
            .read_dimacs(BufReader::new(instance))
            .unwrap_or_else(|e| panic!("parse failure on {path:?}: {e}"));

        let found = solve_all(&mut solver);

        let models_path = path.with_extension("cnf.models");
        let models_file = File::open(&models_path).expect("missing models file");
        let expected = read_models(BufReader::new(models_file)).expect("unreadable models file");

        assert_eq!(
            found.len(),
            expected.len(),
            "model count mismatch on {path:?}",
        );
        assert_eq!(
            model_set(&found),
            model_set(&expected),
            "model mismatch on {path:?}",
        );

        checked += 1;
    }

    assert!(checked > 0, "no instances were checked");
}
