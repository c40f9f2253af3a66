//! Core value types for the solver.
//!
//! - [`Lit`]: a packed literal (variable plus sign in one integer)
//! - [`Tribool`]: tri-valued truth with undefined as the third state

mod lit;
mod tribool;

pub use lit::{Lit, Var};
pub use tribool::Tribool;
