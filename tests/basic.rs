use marten_sat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod common;
use common::context_with;

mod basic {
    use marten_sat::{
        context::ContextState,
        structures::literal::{CLiteral, Literal},
        types::err::{self},
    };

    use super::*;

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![]));
    }

    #[test]
    fn atoms_without_clauses() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(5).unwrap();
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model().map(|model| model.len()), Some(5));
    }

    #[test]
    fn one_literal() {
        let mut ctx = context_with(Config::default(), 1, &[vec![1]]);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![true]));
    }

    #[test]
    fn literal_and_negation() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(1).unwrap();

        let p = ctx.clause_from_ints(&[1]).unwrap();
        assert!(matches!(ctx.add_clause(p), Ok(ClauseOk::Added(_))));

        let not_p = ctx.clause_from_ints(&[-1]).unwrap();
        assert_eq!(ctx.add_clause(not_p), Ok(ClauseOk::Unsatisfiable));

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.model(), None);
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(2).unwrap();
        let p_q = ctx.clause_from_ints(&[1, 2]).unwrap();
        assert!(ctx.add_clause(p_q).is_ok());

        assert_eq!(ctx.add_clause(Vec::<CLiteral>::new()), Ok(ClauseOk::Unsatisfiable));
        assert_eq!(ctx.state, ContextState::Unsatisfiable);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn conflict() {
        let mut ctx = context_with(
            Config::default(),
            2,
            &[vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]],
        );
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = context_with(Config::default(), 2, &[vec![1, 2], vec![-1]]);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![false, true]));
    }

    #[test]
    fn duplicates_are_removed() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(2).unwrap();
        let clause = vec![
            CLiteral::new(1, true),
            CLiteral::new(1, true),
            CLiteral::new(2, true),
            CLiteral::new(2, true),
        ];

        let Ok(ClauseOk::Added(key)) = ctx.add_clause(clause) else {
            panic!("clause not added");
        };
        assert_eq!(ctx.clause_db.get(&key).map(|clause| clause.len()), Ok(2));
    }

    #[test]
    fn tautologies_are_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(2).unwrap();
        let clause = ctx.clause_from_ints(&[1, -1, 2]).unwrap();
        assert_eq!(
            ctx.add_clause(clause),
            Err(err::ErrorKind::MalformedClause(err::MalformedClauseError::Tautology))
        );
    }

    #[test]
    fn unknown_atoms_are_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ensure_atoms(2).unwrap();
        assert_eq!(
            ctx.clause_from_ints(&[1, -3]),
            Err(err::MalformedClauseError::UnknownAtom(-3))
        );
        assert_eq!(ctx.clause_from_ints(&[1, 0]), Err(err::MalformedClauseError::Zero));
    }

    #[test]
    fn chain_of_implications() {
        let clauses = (1..20).map(|i| vec![-i, i + 1]).chain([vec![1]]).collect::<Vec<_>>();
        let mut ctx = context_with(Config::default(), 20, &clauses);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![true; 20]));
    }

    #[test]
    fn solved_context_reports_again() {
        let mut ctx = context_with(Config::default(), 2, &[vec![1, 2]]);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.report(), Report::Satisfiable);
    }
}

mod limits {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use super::*;

    fn pigeonhole(holes: i32) -> (usize, Vec<Vec<i32>>) {
        let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;
        let mut clauses = Vec::default();
        for pigeon in 0..=holes {
            clauses.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
        }
        for hole in 0..holes {
            for p in 0..=holes {
                for q in (p + 1)..=holes {
                    clauses.push(vec![-atom(p, hole), -atom(q, hole)]);
                }
            }
        }
        (((holes + 1) * holes) as usize, clauses)
    }

    #[test]
    fn conflict_limit() {
        let mut config = Config::default();
        config.conflict_limit.set(3).unwrap();

        let (atoms, clauses) = pigeonhole(6);
        let mut ctx = context_with(config, atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert!(ctx.counters.total_conflicts >= 3);
        assert_eq!(ctx.current_level(), 0);
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        config.time_limit.set(Duration::from_nanos(1)).unwrap();

        let (atoms, clauses) = pigeonhole(8);
        let mut ctx = context_with(config, atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
    }

    #[test]
    fn callback_terminate() {
        let (atoms, clauses) = pigeonhole(6);
        let mut ctx = context_with(Config::default(), atoms, &clauses);

        let polls = Arc::new(AtomicUsize::new(0));
        let polls_clone = polls.clone();
        ctx.set_callback_terminate(Box::new(move || {
            polls_clone.fetch_add(1, Ordering::Relaxed) >= 10
        }));

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(polls.load(Ordering::Relaxed), 11);
    }

    #[test]
    fn resumes_after_limit() {
        let mut config = Config::default();
        config.conflict_limit.set(2).unwrap();

        let (atoms, clauses) = pigeonhole(4);
        let mut ctx = context_with(config, atoms, &clauses);
        assert_eq!(ctx.solve(), Ok(Report::Unknown));

        ctx.config.conflict_limit.set(0).unwrap();
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}
