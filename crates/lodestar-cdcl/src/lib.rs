//! # lodestar-cdcl
//!
//! Conflict-Driven Clause-Learning (CDCL) core of the Lodestar SAT solver.
//!
//! Implements:
//! - Two-watched-literal Boolean constraint propagation
//! - A trail with decision-level bookkeeping and non-chronological backjumps
//! - First-UIP conflict analysis with clause learning
//! - Clause ingestion with tautology and duplicate elimination
//!
//! # Example
//!
//! ```
//! use lodestar_cdcl::Solver;
//!
//! // ( !x1 | !x3 | !x4 ) & ( x2 | x3 | !x4 ) & ( x1 | !x2 | x4 ) &
//! // ( x1 | x3 | x4 ) & ( !x1 | x2 | !x3 ) & ( !x4 )
//! let mut solver = Solver::new();
//! solver.add_formula([
//!     vec![-1, -3, -4],
//!     vec![2, 3, -4],
//!     vec![1, -2, 4],
//!     vec![1, 3, 4],
//!     vec![-1, 2, -3],
//!     vec![-4],
//! ]);
//!
//! assert!(solver.solve());
//!
//! let solution = solver.assignments();
//! assert_eq!(solution[&4], false);
//! ```

pub mod assign;
pub mod bcp;
pub mod clause_db;
mod conflict;
pub mod decision;
pub mod solver;
pub mod trace;
mod trail;

pub use decision::{BranchingHeuristic, FirstUnassigned};
pub use solver::{Solver, SolverStats};
pub use trace::{LogTracer, Tracer};
