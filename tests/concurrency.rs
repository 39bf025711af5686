use std::path::{Path, PathBuf};

use marten_sat::{config::Config, reports::Report};

mod common;
use common::checked_formula_report;

mod concurrency {
    use super::*;

    #[test]
    fn independent_contexts_on_threads() {
        let fixtures: Vec<(PathBuf, Report)> = vec![
            ("c1012.250.SAT.cnf", Report::Satisfiable),
            ("hole3.UNSAT.cnf", Report::Unsatisfiable),
            ("hole4.UNSAT.cnf", Report::Unsatisfiable),
            ("headless.SAT.cnf", Report::Satisfiable),
        ]
        .into_iter()
        .map(|(name, report)| (Path::new(".").join("tests").join("cnf").join(name), report))
        .collect();

        let config = Config::default();

        let reports = crossbeam::scope(|scope| {
            let handles = fixtures
                .iter()
                .map(|(path, _)| {
                    let config = &config;
                    scope.spawn(move |_| checked_formula_report(path, config))
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("solve thread"))
                .collect::<Vec<_>>()
        })
        .expect("scope");

        for ((path, expected), report) in fixtures.iter().zip(reports) {
            assert_eq!(report, *expected, "{path:?}");
        }
    }

    #[test]
    fn context_moves_across_threads() {
        let path = Path::new(".").join("tests").join("cnf").join("hole3.UNSAT.cnf");
        let ctx = common::load_dimacs(&path, &Config::default());

        let report = std::thread::spawn(move || {
            let mut ctx = ctx;
            ctx.solve()
        })
        .join()
        .expect("solve thread");

        assert_eq!(report, Ok(Report::Unsatisfiable));
    }
}
