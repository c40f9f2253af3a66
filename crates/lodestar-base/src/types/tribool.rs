//! Tri-valued truth.

use serde::{Deserialize, Serialize};

/// A tri-state boolean with undefined as the third state.
///
/// An unassigned variable reads as [`Tribool::Undef`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tribool {
    /// Known true.
    True,
    /// Known false.
    False,
    /// Not (yet) assigned.
    #[default]
    Undef,
}

impl Tribool {
    /// Converts a plain boolean.
    #[must_use]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Tribool::True
        } else {
            Tribool::False
        }
    }

    /// Flips true and false when `flip` is set; `Undef` is fixed either way.
    ///
    /// This is how a variable's value becomes a literal's value: the sign of
    /// the literal is the flip.
    #[must_use]
    pub const fn xor(self, flip: bool) -> Self {
        match (self, flip) {
            (Tribool::True, true) => Tribool::False,
            (Tribool::False, true) => Tribool::True,
            (value, _) => value,
        }
    }

    /// Returns true only for [`Tribool::True`].
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Tribool::True)
    }

    /// Returns true for any defined value.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        !matches!(self, Tribool::Undef)
    }
}
