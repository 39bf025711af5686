/*!
Procedures which operate on a context, and are combined to determine the satisfiability of a formula.

The entry point is the [solve](crate::procedures::solve) procedure, which sequences:
- [BCP](crate::procedures::bcp), through [apply_consequences](crate::procedures::apply_consequences).
- [Conflict analysis](crate::procedures::analysis), and the [backjump](crate::procedures::backjump) to the assertion level of a learned clause.
- [Decisions](crate::procedures::decision).
- [Restarts and reductions](crate::procedures::schedulers), as scheduled.

Each procedure is implemented as methods on a [GenericContext](crate::context::GenericContext).
*/

pub mod analysis;
pub mod apply_consequences;
pub mod assign;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod reduction;
pub mod schedulers;
pub mod solve;
