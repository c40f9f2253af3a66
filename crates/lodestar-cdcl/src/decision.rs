//! Decision heuristic interface.

use crate::assign::AssignMap;
use lodestar_base::{Tribool, Var};

/// Chooses the next decision variable.
///
/// The solver consults the heuristic whenever propagation reaches a fixpoint
/// without a conflict. An activity-based heuristic can replace the default
/// without touching the propagator or the conflict analyzer.
pub trait BranchingHeuristic {
    /// Picks an unassigned variable from `active`, or `None` when every
    /// active variable is assigned.
    fn pick(&mut self, assigns: &AssignMap, active: &[bool]) -> Option<Var>;
}

/// The default heuristic: the lowest-numbered unassigned active variable.
///
/// Deterministic, which keeps solver runs reproducible in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstUnassigned;

impl BranchingHeuristic for FirstUnassigned {
    fn pick(&mut self, assigns: &AssignMap, active: &[bool]) -> Option<Var> {
        for (index, &is_active) in active.iter().enumerate() {
            let var = index as Var;
            if is_active && assigns.value(var) == Tribool::Undef {
                return Some(var);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_unassigned_skips_inactive_and_assigned() {
        let mut assigns = AssignMap::new();
        assigns.grow_to(6);
        let mut active = vec![false; 6];
        active[2] = true;
        active[4] = true;

        let mut heuristic = FirstUnassigned;
        assert_eq!(heuristic.pick(&assigns, &active), Some(2));

        assigns.assign(2, Tribool::True);
        assert_eq!(heuristic.pick(&assigns, &active), Some(4));

        assigns.assign(4, Tribool::False);
        assert_eq!(heuristic.pick(&assigns, &active), None);
    }
}
