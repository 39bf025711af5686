#![allow(dead_code)]

use std::{fs::File, io::BufReader, path::Path};

use marten_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::IntLiteral,
    types::err::{self},
};

/// A context with the given clauses added, each clause as DIMACS integers.
pub fn context_with(config: Config, atoms: usize, clauses: &[Vec<IntLiteral>]) -> Context {
    let mut ctx = Context::from_config(config);
    ctx.ensure_atoms(atoms).expect("atoms");
    for clause in clauses {
        let clause = ctx.clause_from_ints(clause).expect("well formed clause");
        match ctx.add_clause(clause) {
            Ok(_) => {}
            Err(err::ErrorKind::MalformedClause(err::MalformedClauseError::Tautology)) => {}
            Err(e) => panic!("{e:?}"),
        }
    }
    ctx
}

/// The clauses of a DIMACS file, as integers, read independently of any context.
pub fn dimacs_clauses(path: &Path) -> Vec<Vec<IntLiteral>> {
    let text = std::fs::read_to_string(path).expect("readable file");

    let mut clauses = Vec::default();
    let mut clause = Vec::default();
    for line in text.lines() {
        match line.trim_start().chars().next() {
            None | Some('c') | Some('p') => continue,
            Some('%') => break,
            Some(_) => {}
        }
        for item in line.split_whitespace() {
            match item.parse::<IntLiteral>().expect("integer") {
                0 => clauses.push(std::mem::take(&mut clause)),
                int => clause.push(int),
            }
        }
    }
    clauses
}

/// Reads the DIMACS file at `path` into a fresh context.
pub fn load_dimacs(path: &Path, config: &Config) -> Context {
    let mut ctx = Context::from_config(config.clone());
    let file = File::open(path).unwrap_or_else(|_| panic!("Could not load {path:?}"));
    if let Err(e) = ctx.read_dimacs(BufReader::new(&file)) {
        panic!("{path:?}: {e:?}");
    }
    ctx
}

/// Solves the DIMACS file at `path`, checking any model against the clauses of the file.
pub fn checked_formula_report(path: &Path, config: &Config) -> Report {
    let mut ctx = load_dimacs(path, config);

    let report = match ctx.solve() {
        Ok(report) => report,
        Err(e) => panic!("{path:?}: {e:?}"),
    };

    if report == Report::Satisfiable {
        assert!(ctx.model_satisfies(&dimacs_clauses(path)), "{path:?}");
    }

    report
}

/// Whether some valuation of `atoms` atoms satisfies every clause, by enumeration.
pub fn brute_force_satisfiable(atoms: usize, clauses: &[Vec<IntLiteral>]) -> bool {
    (0..(1_u32 << atoms)).any(|bits| {
        clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                let value = bits & (1 << (literal.unsigned_abs() - 1)) != 0;
                value == literal.is_positive()
            })
        })
    })
}
