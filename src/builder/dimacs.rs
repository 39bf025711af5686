use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, IntLiteral, Literal},
    types::err::{self},
};

/// The largest atom added on demand when reading a formula without a problem line.
pub const HEADERLESS_ATOM_LIMIT: usize = 1 << 24;

/// Information gathered while reading a DIMACS formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem line, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of atoms in the context after reading.
    pub added_atoms: usize,

    /// The count of clauses read.
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// - Lines beginning with `c` are comments.
    /// - The problem line `p cnf <atoms> <clauses>` is optional, but must precede every clause.
    ///   If present, every literal must be within the given count of atoms, and otherwise atoms are added as required, up to [HEADERLESS_ATOM_LIMIT].
    /// - Clauses are sequences of integers terminated by `0`, and may span lines.
    /// - A line beginning with `%` ends the formula.
    ///
    /// A clause containing some literal and its negation is skipped.
    /// A difference between the counts of the problem line and the formula read is noted with a warning.
    ///
    /// ```rust
    /// # use marten_sat::context::Context;
    /// # use marten_sat::config::Config;
    /// # use marten_sat::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c A comment.
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<IntLiteral> = Vec::default();

        let mut line_counter = 0;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    if info.expected_atoms.is_some() || info.added_clauses > 0 || !clause_buffer.is_empty() {
                        log::error!(target: targets::DIMACS, "Problem line at line {line_counter}");
                        return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(line_counter)));
                    }

                    let (atoms, clauses) = parse_problem(&buffer)?;
                    self.ensure_atoms(atoms)?;
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => {
                    for item in buffer.split_whitespace() {
                        let Ok(int) = item.parse::<IntLiteral>() else {
                            log::error!(target: targets::DIMACS, "Unexpected '{item}' at line {line_counter}");
                            return Err(err::ErrorKind::from(err::ParseError::Line(line_counter)));
                        };

                        match int {
                            0 => {
                                self.add_dimacs_clause(&clause_buffer, &info)?;
                                clause_buffer.clear();
                                info.added_clauses += 1;
                            }

                            _ => clause_buffer.push(int),
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::error!(target: targets::DIMACS, "Unterminated clause: {clause_buffer:?}");
            return Err(err::ErrorKind::from(err::MalformedClauseError::Unterminated));
        }

        info.added_atoms = self.atom_count();

        if let Some(expected) = info.expected_atoms {
            if expected != info.added_atoms {
                log::warn!(target: targets::DIMACS, "Expected {expected} atoms, found {}", info.added_atoms);
            }
        }
        if let Some(expected) = info.expected_clauses {
            if expected != info.added_clauses {
                log::warn!(target: targets::DIMACS, "Expected {expected} clauses, found {}", info.added_clauses);
            }
        }

        log::info!(target: targets::DIMACS, "Read {} clauses over {} atoms", info.added_clauses, info.added_atoms);
        Ok(info)
    }

    /// Adds a clause of DIMACS integers, read as part of a formula.
    fn add_dimacs_clause(
        &mut self,
        clause: &[IntLiteral],
        info: &ParserInfo,
    ) -> Result<(), err::ErrorKind> {
        let mut the_clause = Vec::with_capacity(clause.len());
        for int in clause {
            let atom = int.atom();
            match info.expected_atoms {
                Some(limit) if atom as usize > limit => {
                    log::error!(target: targets::DIMACS, "Literal {int} outside of the declared atoms");
                    return Err(err::ErrorKind::from(
                        err::MalformedClauseError::UnknownAtom(int.as_int()),
                    ));
                }
                Some(_) => {}
                None if atom as usize > HEADERLESS_ATOM_LIMIT => {
                    log::error!(target: targets::DIMACS, "Literal {int} beyond the atom limit of a formula without a problem line");
                    return Err(err::ErrorKind::from(
                        err::MalformedClauseError::UnknownAtom(int.as_int()),
                    ));
                }
                None => self.ensure_atoms(atom as usize)?,
            }
            the_clause.push(CLiteral::new(atom, int.polarity()));
        }

        match self.add_clause(the_clause) {
            Ok(_) => Ok(()),
            Err(err::ErrorKind::MalformedClause(err::MalformedClauseError::Tautology)) => {
                log::info!(target: targets::DIMACS, "Skipped tautology: {clause:?}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// The atom and clause counts of a problem line.
fn parse_problem(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut details = line.split_whitespace();

    match (details.next(), details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification),
    }

    let mut count = || -> Result<usize, err::ParseError> {
        details
            .next()
            .and_then(|string| string.parse().ok())
            .ok_or(err::ParseError::ProblemSpecification)
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}
