//! Packed literal representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 0-based variable index.
pub type Var = u32;

/// A literal in a formula.
///
/// The least significant bit is the sign of the literal (0 = positive,
/// 1 = negative) and the remaining bits hold the variable index. For
/// variable 12 the positive literal has code 24 and the negated literal
/// has code 25.
///
/// Sorting literals numerically therefore places `x` and `¬x` next to each
/// other, with the positive literal first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Lit(u32);

impl Lit {
    /// The undefined literal, distinct from every valid literal.
    pub const UNDEF: Lit = Lit(u32::MAX);

    /// Creates a literal for variable `var`. `negated` is true for `¬var`.
    #[must_use]
    pub const fn new(var: Var, negated: bool) -> Self {
        Lit((var << 1) | negated as u32)
    }

    /// Creates a literal from a signed integer where the absolute value is
    /// the variable and a negative value means a negated literal.
    /// `-12` is variable 12, negated.
    #[must_use]
    pub fn from_dimacs(value: i64) -> Self {
        Lit::new(value.unsigned_abs() as Var, value < 0)
    }

    /// Returns the variable of this literal.
    #[must_use]
    pub const fn var(self) -> Var {
        self.0 >> 1
    }

    /// Returns true if the literal is negated.
    #[must_use]
    pub const fn sign(self) -> bool {
        self.0 & 1 == 1
    }

    /// Negates the literal. A single bit flip.
    #[must_use]
    pub const fn negate(self) -> Self {
        Lit(self.0 ^ 1)
    }

    /// Returns the raw code of this literal, usable as a dense index.
    #[must_use]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Reconstructs a literal from a raw code.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        Lit(code)
    }

    /// Returns the signed integer representation. `+x` is a positive
    /// literal and `-x` a negated literal.
    #[must_use]
    pub fn to_dimacs(self) -> i64 {
        let value = i64::from(self.var());
        if self.sign() {
            -value
        } else {
            value
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}
