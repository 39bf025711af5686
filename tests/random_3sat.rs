use marten_sat::{config::Config, generic::random::MinimalPCG32, reports::Report};
use rand::{Rng, SeedableRng};

mod common;
use common::{brute_force_satisfiable, context_with};

/// A uniform random 3-SAT formula, with three distinct atoms in each clause.
fn random_formula(rng: &mut MinimalPCG32, atoms: usize, clauses: usize) -> Vec<Vec<i32>> {
    (0..clauses)
        .map(|_| {
            let mut clause: Vec<i32> = Vec::with_capacity(3);
            while clause.len() < 3 {
                let atom = rng.random_range(1..=atoms as i32);
                if clause.iter().any(|literal| literal.abs() == atom) {
                    continue;
                }
                match rng.random_bool(0.5) {
                    true => clause.push(atom),
                    false => clause.push(-atom),
                }
            }
            clause
        })
        .collect()
}

mod random_3sat {
    use super::*;

    fn cross_check(seed: u64, atoms: usize, clauses: usize, config: &Config) {
        let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());

        for _ in 0..40 {
            let formula = random_formula(&mut rng, atoms, clauses);
            let expected = match brute_force_satisfiable(atoms, &formula) {
                true => Report::Satisfiable,
                false => Report::Unsatisfiable,
            };

            let mut ctx = context_with(config.clone(), atoms, &formula);
            assert_eq!(ctx.solve(), Ok(expected), "{formula:?}");

            if expected == Report::Satisfiable {
                assert!(ctx.model_satisfies(&formula), "{formula:?}");
            }
        }
    }

    #[test]
    fn below_threshold() {
        cross_check(7, 10, 30, &Config::default());
    }

    #[test]
    fn at_threshold() {
        cross_check(11, 10, 43, &Config::default());
    }

    #[test]
    fn above_threshold() {
        cross_check(13, 8, 60, &Config::default());
    }

    #[test]
    fn at_threshold_with_eager_schedules() {
        let mut config = Config::default();
        config.restart_first.set(2).unwrap();
        config.reduction_first.set(3).unwrap();
        config.reduction_increment.set(1).unwrap();
        config.random_decision_bias.set(0.2).unwrap();
        cross_check(17, 12, 52, &config);
    }
}
