mod conflict_analysis {
    use marten_sat::{
        config::Config,
        context::Context,
        procedures::analysis::AnalysisResult,
        structures::{
            literal::{CLiteral, Literal},
            valuation::{CValuation, Valuation},
        },
        types::err::{self},
    };

    /// Decides each literal in turn until propagation finds a conflict, and returns the valuation at the conflict together with the analysis.
    fn analyse_first_conflict(
        ctx: &mut Context,
        decisions: &[CLiteral],
    ) -> (CValuation, AnalysisResult) {
        for decision in decisions {
            ctx.decide(*decision).unwrap();
            match ctx.propagate() {
                Ok(()) => {}
                Err(err::BCPError::Conflict(key)) => {
                    let valuation = ctx.atom_db.valuation_canonical().clone();
                    let result = ctx.conflict_analysis(&key).unwrap();
                    return (valuation, result);
                }
                Err(e) => panic!("{e:?}"),
            }
        }
        panic!("No conflict");
    }

    fn falsified_by(valuation: &CValuation, literals: &[CLiteral]) -> bool {
        literals
            .iter()
            .all(|literal| valuation.value_of(literal.atom()) == Some(Some(!literal.polarity())))
    }

    #[test]
    fn asserting_clause_across_levels() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(5).unwrap();
        for clause in [[-1, -3, 4], [-3, -4, 5], [-1, -4, -5]] {
            let clause = ctx.clause_from_ints(&clause).unwrap();
            ctx.add_clause(clause).unwrap();
        }

        let (conflict_valuation, result) =
            analyse_first_conflict(&mut ctx, &[CLiteral::new(1, true), CLiteral::new(3, true)]);

        let AnalysisResult::AssertingClause { key, literal } = result else {
            panic!("Expected an asserting clause");
        };
        assert_eq!(literal, CLiteral::new(3, false));

        let learnt = ctx.clause_db.get(&key).unwrap().clause().clone();
        let mut sorted = learnt.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![CLiteral::new(1, false), CLiteral::new(3, false)]);

        // Falsified at the conflict.
        assert!(falsified_by(&conflict_valuation, &learnt));

        // Asserting after the backjump.
        assert_eq!(ctx.current_level(), 1);
        assert_eq!(ctx.atom_db.value_of(3), None);
        assert!(falsified_by(
            ctx.atom_db.valuation_canonical(),
            &learnt.iter().filter(|l| **l != literal).copied().collect::<Vec<_>>()
        ));

        // Satisfied once the asserted literal is assigned.
        ctx.assign(literal, Some(key)).unwrap();
        assert!(learnt
            .iter()
            .any(|l| ctx.atom_db.value_of(l.atom()) == Some(l.polarity())));
        assert!(ctx.propagate().is_ok());
    }

    #[test]
    fn unit_clause_jumps_to_level_zero() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(3).unwrap();
        for clause in [[-1, 2], [-2, 3], [-2, -3]] {
            let clause = ctx.clause_from_ints(&clause).unwrap();
            ctx.add_clause(clause).unwrap();
        }

        let (conflict_valuation, result) =
            analyse_first_conflict(&mut ctx, &[CLiteral::new(1, true)]);

        let AnalysisResult::UnitClause { literal } = result else {
            panic!("Expected a unit clause");
        };
        assert_eq!(literal, CLiteral::new(2, false));
        assert!(falsified_by(&conflict_valuation, &[literal]));
        assert_eq!(ctx.current_level(), 0);
        assert_eq!(ctx.atom_db.value_of(2), None);
    }

    #[test]
    fn analysis_requires_a_decision() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(2).unwrap();
        let clause = ctx.clause_from_ints(&[1, 2]).unwrap();
        let key = match ctx.add_clause(clause) {
            Ok(marten_sat::builder::ClauseOk::Added(key)) => key,
            _ => panic!("clause not added"),
        };

        assert_eq!(
            ctx.conflict_analysis(&key),
            Err(err::ErrorKind::Analysis(err::AnalysisError::NoDecision))
        );
    }
}
