/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause).
- Add the clause to the context.

Alternatively, [ensure_atoms](crate::context::GenericContext::ensure_atoms) and [clause_from_ints](crate::context::GenericContext::clause_from_ints) build clauses from DIMACS integers, and [read_dimacs](crate::context::GenericContext::read_dimacs) reads a whole formula.

# Examples

A clause built using basic methods.

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

Clauses are checked and simplified when added.

```rust
# use marten_sat::builder::ClauseOk;
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::types::err::{ErrorKind, MalformedClauseError};
let mut the_context = Context::from_config(Config::default());
the_context.ensure_atoms(2).unwrap();

let tautology = the_context.clause_from_ints(&[1, -1]).unwrap();
assert_eq!(
    the_context.add_clause(tautology),
    Err(ErrorKind::MalformedClause(MalformedClauseError::Tautology))
);
assert!(the_context.clause_from_ints(&[3]).is_err());

let unit = the_context.clause_from_ints(&[-2]).unwrap();
assert!(matches!(the_context.add_clause(unit), Ok(ClauseOk::Added(_))));

let satisfied = the_context.clause_from_ints(&[1, -2]).unwrap();
assert_eq!(the_context.add_clause(satisfied), Ok(ClauseOk::Satisfied));
```
*/

mod dimacs;
pub use dimacs::{ParserInfo, HEADERLESS_ATOM_LIMIT};

mod structures;

use crate::db::ClauseKey;

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context, with the given key.
    Added(ClauseKey),

    /// The clause is satisfied by some literal fixed without any decision (and so was not added to the context).
    Satisfied,

    /// Every literal of the clause is falsified without any decision, and so the context is unsatisfiable.
    Unsatisfiable,
}
