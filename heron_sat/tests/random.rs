//! Random 3-SAT instances near the phase transition, cross-checked against
//! exhaustive enumeration.

use rand::{rngs::StdRng, Rng, SeedableRng};

use heron_sat::{
    config::Config,
    reports::Report,
    solver::Solver,
    structures::literal::Literal,
};

/// The clause/variable ratio of the generated instances.
const RATIO: f64 = 4.3;

/// A random 3-SAT instance: clauses of three distinct variables with random
/// polarities.
fn random_instance(rng: &mut StdRng, variables: u32) -> Vec<Vec<Literal>> {
    let clauses = (variables as f64 * RATIO).round() as usize;

    (0..clauses)
        .map(|_| {
            let mut chosen = Vec::with_capacity(3);
            while chosen.len() < 3 {
                let variable = rng.random_range(0..variables);
                if !chosen.contains(&variable) {
                    chosen.push(variable);
                }
            }
            chosen
                .into_iter()
                .map(|variable| Literal::new(variable, rng.random_bool(0.5)))
                .collect()
        })
        .collect()
}

/// True if some assignment satisfies every clause, by exhaustive enumeration.
fn brute_force_satisfiable(variables: u32, clauses: &[Vec<Literal>]) -> bool {
    (0..1u64 << variables).any(|assignment| satisfies(assignment, clauses))
}

fn satisfies(assignment: u64, clauses: &[Vec<Literal>]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|literal| {
            let value = assignment & (1 << literal.variable()) != 0;
            value == literal.is_positive()
        })
    })
}

fn model_as_bits(model: &[bool]) -> u64 {
    model
        .iter()
        .enumerate()
        .fold(0, |bits, (variable, &value)| match value {
            true => bits | (1 << variable),
            false => bits,
        })
}

#[test]
fn agreement_with_exhaustive_enumeration() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..60 {
        let variables = 6 + (round % 7) as u32; // 6 ..= 12
        let clauses = random_instance(&mut rng, variables);

        let mut solver = Solver::new(Config::default());
        for _ in 0..variables {
            solver.add_variable();
        }
        for clause in &clauses {
            assert!(solver.add_clause(clause.clone()).is_ok());
        }

        let expected = brute_force_satisfiable(variables, &clauses);
        match solver.solve() {
            Report::Satisfiable => {
                assert!(expected, "solver found a model of an unsatisfiable instance");
                // And the model indeed satisfies every clause.
                let model = solver.models.last().unwrap();
                assert!(
                    satisfies(model_as_bits(model), &clauses),
                    "the reported model falsifies a clause",
                );
            }
            Report::Unsatisfiable => {
                assert!(!expected, "solver refuted a satisfiable instance");
            }
            Report::Unknown => panic!("no stop condition was set"),
        }
    }
}

#[test]
fn phase_saving_changes_nothing_about_answers() {
    let mut rng = StdRng::seed_from_u64(0xacc);

    for _ in 0..20 {
        let variables = 9;
        let clauses = random_instance(&mut rng, variables);

        let mut plain = Solver::new(Config::default());
        let mut saving = Solver::new(Config {
            phase_saving: true,
            ..Config::default()
        });

        for solver in [&mut plain, &mut saving] {
            for _ in 0..variables {
                solver.add_variable();
            }
            for clause in &clauses {
                assert!(solver.add_clause(clause.clone()).is_ok());
            }
        }

        assert_eq!(plain.solve(), saving.solve());
    }
}
