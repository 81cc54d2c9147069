use heron_sat::{
    config::Config,
    reports::Report,
    solver::Solver,
    structures::{lbool::LBool, literal::Literal},
};

fn solver_with_variables(count: u32) -> (Solver, Vec<Literal>) {
    let mut solver = Solver::new(Config::default());
    let literals = (0..count)
        .map(|_| Literal::positive(solver.add_variable()))
        .collect();
    (solver, literals)
}

/// Adds a clause blocking the latest model: the negation of every assignment.
fn block_latest_model(solver: &mut Solver) {
    let model = solver.models.last().expect("no model to block");
    let blocking = model
        .iter()
        .enumerate()
        .map(|(variable, &value)| Literal::new(variable as u32, !value))
        .collect();
    let _ = solver.add_clause(blocking);
}

#[test]
fn unit_propagation_cascade() {
    let (mut solver, literals) = solver_with_variables(3);

    assert!(solver.add_clause(vec![literals[0]]).is_ok());
    assert!(solver.add_clause(vec![-literals[0], literals[1]]).is_ok());
    assert!(solver.add_clause(vec![-literals[1], literals[2]]).is_ok());

    assert_eq!(solver.solve(), Report::Satisfiable);
    assert_eq!(solver.models.last(), Some(&vec![true, true, true]));

    // The model is unique.
    block_latest_model(&mut solver);
    assert_eq!(solver.solve(), Report::Unsatisfiable);
}

#[test]
fn immediate_contradiction() {
    let (mut solver, literals) = solver_with_variables(1);

    assert!(solver.add_clause(vec![literals[0]]).is_ok());
    assert!(solver.add_clause(vec![-literals[0]]).is_ok());

    assert!(solver.is_unsat());
    assert_eq!(solver.solve(), Report::Unsatisfiable);
    assert_eq!(solver.report(), Report::Unsatisfiable);
}

#[test]
fn pigeonhole_three_pigeons_two_holes() {
    // Variable 2p + h: pigeon p sits in hole h.
    let (mut solver, literals) = solver_with_variables(6);

    // Every pigeon sits somewhere.
    for pigeon in 0..3 {
        let clause = vec![literals[2 * pigeon], literals[2 * pigeon + 1]];
        assert!(solver.add_clause(clause).is_ok());
    }

    // No two pigeons share a hole.
    for hole in 0..2 {
        for first in 0..3 {
            for second in (first + 1)..3 {
                let clause = vec![-literals[2 * first + hole], -literals[2 * second + hole]];
                assert!(solver.add_clause(clause).is_ok());
            }
        }
    }

    assert_eq!(solver.solve(), Report::Unsatisfiable);
}

#[test]
fn exhaustive_sign_patterns_over_three_variables() {
    // All eight sign patterns over three variables rule out every assignment,
    // exercising conflict analysis repeatedly.
    let (mut solver, literals) = solver_with_variables(3);

    for pattern in 0..8u32 {
        let clause = (0..3)
            .map(|position| {
                let literal = literals[position as usize];
                match pattern & (1 << position) == 0 {
                    true => literal,
                    false => -literal,
                }
            })
            .collect();
        assert!(solver.add_clause(clause).is_ok());
    }

    assert_eq!(solver.solve(), Report::Unsatisfiable);
}

#[test]
fn all_models_of_a_free_formula() {
    // Two variables and no clauses: four models, enumerated by blocking.
    let (mut solver, _) = solver_with_variables(2);

    let mut found = std::collections::HashSet::new();
    while solver.solve() == Report::Satisfiable {
        let model = solver.models.last().unwrap().clone();
        assert!(found.insert(model), "a model was repeated");
        block_latest_model(&mut solver);
    }

    assert_eq!(found.len(), 4);
    assert_eq!(solver.models.len(), 4);
}

#[test]
fn duplicate_literals_are_dropped() {
    let (mut solver, literals) = solver_with_variables(2);

    let clause = vec![literals[0], literals[0], literals[1], literals[1]];
    assert!(solver.add_clause(clause).is_ok());

    let stored: Vec<_> = solver.clause_db.originals().collect();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].1.len(), 2);
}

#[test]
fn tautologies_leave_no_constraint() {
    let (mut solver, literals) = solver_with_variables(2);

    let clause = vec![literals[0], -literals[1], -literals[0]];
    assert!(solver.add_clause(clause).is_ok());
    assert_eq!(solver.clause_db.original_count(), 0);

    assert_eq!(solver.solve(), Report::Satisfiable);
}

#[test]
fn values_are_read_back_after_a_solve() {
    let (mut solver, literals) = solver_with_variables(2);

    assert!(solver.add_clause(vec![literals[0], literals[1]]).is_ok());
    assert!(solver.add_clause(vec![-literals[0]]).is_ok());

    assert_eq!(solver.solve(), Report::Satisfiable);

    // The unit is fixed at the root and survives the end-of-solve backtrack.
    assert_eq!(solver.value_of(0), LBool::False);
    let model = solver.models.last().unwrap();
    assert!(!model[0]);
    assert!(model[1]);
}

#[test]
fn clauses_are_rejected_away_from_the_root() {
    use heron_sat::types::err::{BuildError, ErrorKind};

    let (mut solver, literals) = solver_with_variables(2);

    assert!(solver.assume(literals[0]));
    assert_eq!(
        solver.add_clause(vec![literals[1]]),
        Err(ErrorKind::Build(BuildError::NonRootAddition)),
    );
}

#[test]
fn statistics_accumulate() {
    let (mut solver, literals) = solver_with_variables(3);

    for pattern in 0..8u32 {
        let clause = (0..3)
            .map(|position| {
                let literal = literals[position as usize];
                match pattern & (1 << position) == 0 {
                    true => literal,
                    false => -literal,
                }
            })
            .collect();
        assert!(solver.add_clause(clause).is_ok());
    }

    assert_eq!(solver.solve(), Report::Unsatisfiable);
    assert!(solver.counters.conflicts > 0);
    assert!(solver.counters.propagations > 0);
    assert!(solver.counters.decisions > 0);
    assert!(solver.counters.restarts > 0);
}
