//! Trail operations: assignment, decision levels, backjumping.

use crate::clause_db::{Reason, VarInfo};
use crate::solver::Solver;
use crate::trace::trace;
use lodestar_base::{Lit, Tribool, Var};
use std::collections::HashMap;

impl Solver {
    /// Reads the current value of a literal.
    #[must_use]
    pub fn lit_value(&self, lit: Lit) -> Tribool {
        self.assigns.lit_value(lit)
    }

    /// Returns the assigned variables and their values. After a `true`
    /// verdict from [`Solver::solve`] this is the satisfying assignment.
    #[must_use]
    pub fn assignments(&self) -> HashMap<Var, bool> {
        let mut result = HashMap::new();
        for &lit in &self.trail {
            result.insert(lit.var(), !lit.sign());
        }
        result
    }

    /// Makes `lit` true: records the value, the reason, and the current
    /// decision level, and appends the literal to the trail.
    ///
    /// The literal must currently be unassigned.
    pub(crate) fn assert_literal(&mut self, lit: Lit, reason: Reason) {
        debug_assert_eq!(self.assigns.lit_value(lit), Tribool::Undef);

        let var = lit.var();
        self.assigns.assign(var, Tribool::from_bool(!lit.sign()));
        self.varinfo[var as usize] = VarInfo {
            reason,
            level: self.decision_level(),
        };
        self.trail.push(lit);
    }

    /// The decision level at which `var` was assigned. Only meaningful while
    /// the variable is assigned.
    pub(crate) fn level(&self, var: Var) -> usize {
        self.varinfo[var as usize].level
    }

    /// Opens a new decision level ahead of asserting the decision literal.
    pub(crate) fn new_decision_level(&mut self) {
        self.trail_lim.push(self.trail.len());
    }

    /// The current decision level. Level 0 holds the root facts.
    #[must_use]
    pub fn decision_level(&self) -> usize {
        self.trail_lim.len()
    }

    /// Backjumps to `level`: pops every trail entry assigned above it,
    /// unassigning each variable, and rewinds the propagation cursor.
    pub(crate) fn trim_to_level(&mut self, level: usize) {
        if self.decision_level() <= level {
            return;
        }

        trace!(self, "trimming trail to level {level}");

        let new_len = self.trail_lim[level];
        for i in (new_len..self.trail.len()).rev() {
            self.assigns.unassign(self.trail[i].var());
        }

        self.qhead = new_len;
        self.trail.truncate(new_len);
        self.trail_lim.truncate(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: i64) -> Lit {
        Lit::from_dimacs(value)
    }

    fn solver_with_vars(num_vars: usize) -> Solver {
        let mut solver = Solver::new();
        // A throwaway clause grows the per-variable state.
        solver.add_clause([num_vars as i64, num_vars as i64 + 1]);
        solver
    }

    #[test]
    fn test_lit_value_after_assert() {
        let cases = [
            (4i64, -4i64, Tribool::False),
            (4, 4, Tribool::True),
            (-4, 4, Tribool::False),
            (-4, -4, Tribool::True),
        ];

        for (asserted, queried, expected) in cases {
            let mut solver = solver_with_vars(8);
            solver.assert_literal(lit(asserted), Reason::Decision);
            assert_eq!(
                solver.lit_value(lit(queried)),
                expected,
                "assert {asserted}, query {queried}"
            );
        }
    }

    #[test]
    fn test_decision_levels() {
        let mut solver = solver_with_vars(8);
        assert_eq!(solver.decision_level(), 0);

        solver.new_decision_level();
        solver.assert_literal(lit(1), Reason::Decision);
        assert_eq!(solver.decision_level(), 1);
        assert_eq!(solver.level(1), 1);

        solver.assert_literal(lit(2), Reason::Unit);
        assert_eq!(solver.level(2), 1);
    }

    #[test]
    fn test_trim_to_level() {
        // Each case asserts a sequence (negative position = new decision
        // level first), trims, and checks the surviving trail.
        struct Case {
            asserts: Vec<(i64, bool)>,
            level: usize,
            expect: Vec<i64>,
        }

        let cases = [
            Case {
                asserts: vec![(1, true), (2, true), (3, false)],
                level: 2,
                expect: vec![1, 2, 3],
            },
            Case {
                asserts: vec![(1, true), (2, true), (3, false)],
                level: 1,
                expect: vec![1],
            },
            Case {
                asserts: vec![(1, true), (2, true), (3, false), (4, true), (5, false)],
                level: 2,
                expect: vec![1, 2, 3],
            },
        ];

        for (index, case) in cases.iter().enumerate() {
            let mut solver = solver_with_vars(8);
            for &(value, decision) in &case.asserts {
                if decision {
                    solver.new_decision_level();
                }
                solver.assert_literal(lit(value), Reason::Decision);
            }

            solver.trim_to_level(case.level);

            let trail: Vec<i64> = solver.trail.iter().map(|l| l.to_dimacs()).collect();
            assert_eq!(trail, case.expect, "case {index}");
            assert_eq!(solver.decision_level(), case.level, "case {index}");

            // Everything above the kept levels is undefined again.
            for &(value, _) in &case.asserts {
                let expected = if case.expect.contains(&value) {
                    Tribool::True
                } else {
                    Tribool::Undef
                };
                assert_eq!(solver.lit_value(lit(value)), expected, "case {index} var {value}");
            }
        }
    }

    #[test]
    fn test_trim_resets_propagation_cursor() {
        let mut solver = solver_with_vars(8);
        solver.assert_literal(lit(1), Reason::Unit);
        solver.qhead = 1;

        solver.new_decision_level();
        solver.assert_literal(lit(2), Reason::Decision);
        solver.qhead = 2;

        solver.trim_to_level(0);
        assert_eq!(solver.qhead, 1);
    }
}
