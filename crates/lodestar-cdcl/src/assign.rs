//! Variable assignment map.

use lodestar_base::{Lit, Tribool, Var};

/// Dense variable-to-truth mapping.
///
/// A variable outside the map's range simply reads as undefined, so the map
/// can lag behind the variable count until [`AssignMap::grow_to`] is called.
#[derive(Debug, Clone, Default)]
pub struct AssignMap {
    values: Vec<Tribool>,
}

impl AssignMap {
    /// Creates an empty assignment map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures the map covers variables `0..num_vars`.
    pub fn grow_to(&mut self, num_vars: usize) {
        if self.values.len() < num_vars {
            self.values.resize(num_vars, Tribool::Undef);
        }
    }

    /// Number of variables the map currently covers.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.values.len()
    }

    /// Reads the value of a variable.
    #[must_use]
    pub fn value(&self, var: Var) -> Tribool {
        self.values.get(var as usize).copied().unwrap_or(Tribool::Undef)
    }

    /// Reads the value of a literal: the variable's value, flipped when the
    /// literal is negated.
    #[must_use]
    pub fn lit_value(&self, lit: Lit) -> Tribool {
        self.value(lit.var()).xor(lit.sign())
    }

    /// Sets a variable. The caller keeps the trail in sync.
    pub fn assign(&mut self, var: Var, value: Tribool) {
        self.values[var as usize] = value;
    }

    /// Clears a variable back to undefined.
    pub fn unassign(&mut self, var: Var) {
        self.values[var as usize] = Tribool::Undef;
    }
}
