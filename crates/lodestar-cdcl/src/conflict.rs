//! Conflict analysis: First-UIP clause learning.

use crate::clause_db::{ClauseRef, Reason};
use crate::solver::Solver;
use lodestar_base::Lit;

impl Solver {
    /// Derives a learned clause and a backjump level from a conflict.
    ///
    /// Starting from the conflicting clause, resolution steps walk the trail
    /// top-down through reason clauses until a single literal assigned at
    /// the current decision level remains: the first unique implication
    /// point. Its negation lands at position 0 of the learned clause, which
    /// becomes unit there after backjumping to the returned level.
    ///
    /// Must only be called at decision level >= 1.
    pub(crate) fn analyze(&mut self, conflict: ClauseRef) -> (Vec<Lit>, usize) {
        let current_level = self.decision_level();
        debug_assert!(current_level >= 1);

        // Position 0 is reserved for the negated UIP.
        let mut learnt: Vec<Lit> = vec![Lit::UNDEF];
        // Number of traced literals assigned at the current level.
        let mut path_count: usize = 0;
        let mut p = Lit::UNDEF;
        let mut clause = conflict;
        let mut index = self.trail.len();

        loop {
            // Trace the literals of the clause. Root-level literals carry no
            // information and are skipped; the clause's propagated literal
            // (position 0, once p is set) is the one being resolved away.
            let start = usize::from(p != Lit::UNDEF);
            for pos in start..self.clauses.lits(clause).len() {
                let q = self.clauses.lits(clause)[pos];
                let q_var = q.var() as usize;
                let q_level = self.varinfo[q_var].level;
                if self.seen[q_var] == 0 && q_level > 0 {
                    self.seen[q_var] = 1;
                    if q_level == current_level {
                        path_count += 1;
                    } else {
                        learnt.push(q);
                    }
                }
            }

            // Resolve against the most recent traced literal on the trail.
            index -= 1;
            while self.seen[self.trail[index].var() as usize] == 0 {
                index -= 1;
            }
            p = self.trail[index];
            self.seen[p.var() as usize] = 0;

            path_count -= 1;
            if path_count == 0 {
                break;
            }

            clause = match self.varinfo[p.var() as usize].reason {
                Reason::Clause(reason) => reason,
                Reason::Decision | Reason::Unit => {
                    unreachable!("traced literal {p} has no reason clause")
                }
            };
        }

        learnt[0] = p.negate();

        // The backjump level is the highest level among the remaining
        // literals; the literal carrying it moves to position 1 so the
        // learned clause watches the right pair after the jump.
        let mut backjump_level = 0;
        if learnt.len() > 1 {
            let mut max_pos = 1;
            let mut max_level = self.level(learnt[1].var());
            for pos in 2..learnt.len() {
                let level = self.level(learnt[pos].var());
                if level > max_level {
                    max_pos = pos;
                    max_level = level;
                }
            }

            learnt.swap(1, max_pos);
            backjump_level = max_level;
        }

        // Clear the marks of exactly the variables this analysis touched.
        for &lit in &learnt {
            self.seen[lit.var() as usize] = 0;
        }

        (learnt, backjump_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestar_base::Tribool;

    fn lit(value: i64) -> Lit {
        Lit::from_dimacs(value)
    }

    fn ints(lits: &[Lit]) -> Vec<i64> {
        lits.iter().map(|l| l.to_dimacs()).collect()
    }

    fn assert_first_uip_shape(solver: &Solver, learnt: &[Lit]) {
        let current = solver.decision_level();
        let at_current = learnt
            .iter()
            .filter(|l| solver.level(l.var()) == current)
            .count();
        assert_eq!(at_current, 1, "learned clause must have one current-level literal");
        assert_eq!(
            solver.level(learnt[0].var()),
            current,
            "the current-level literal must sit at position 0"
        );
    }

    #[test]
    fn test_single_level_conflict_learns_unit() {
        // Deciding 1 forces 2, 3, then 4 through 5 into a conflict; every
        // path from the decision runs through 4, so 4 is the UIP.
        let mut solver = Solver::new();
        solver.add_clause([-1, 2]);
        solver.add_clause([-1, 3]);
        solver.add_clause([-2, -3, 4]);
        solver.add_clause([-4, 5]);
        solver.add_clause([-4, -5]);

        solver.new_decision_level();
        solver.assert_literal(lit(1), Reason::Decision);
        let conflict = solver.propagate().expect("conflict expected");

        let (learnt, backjump_level) = solver.analyze(conflict);
        assert_first_uip_shape(&solver, &learnt);
        assert_eq!(ints(&learnt), vec![-4]);
        assert_eq!(backjump_level, 0);
        assert!(solver.seen.iter().all(|&mark| mark == 0));
    }

    #[test]
    fn test_two_level_conflict_backjumps_to_lower_level() {
        // Level 1 assigns 2; level 2 propagates 4 and 5 into a conflict
        // that also mentions !2, so the learned clause keeps !2 and jumps
        // back to level 1.
        let mut solver = Solver::new();
        solver.add_clause([-1, 2]);
        solver.add_clause([-3, -2, 4]);
        solver.add_clause([-4, 5]);
        solver.add_clause([-4, -5, -2]);

        solver.new_decision_level();
        solver.assert_literal(lit(1), Reason::Decision);
        assert_eq!(solver.propagate(), None);

        solver.new_decision_level();
        solver.assert_literal(lit(3), Reason::Decision);
        let conflict = solver.propagate().expect("conflict expected");

        let (learnt, backjump_level) = solver.analyze(conflict);
        assert_first_uip_shape(&solver, &learnt);
        assert_eq!(ints(&learnt), vec![-4, -2]);
        assert_eq!(backjump_level, 1);
        assert!(solver.seen.iter().all(|&mark| mark == 0));
    }

    #[test]
    fn test_learned_clause_asserts_after_backjump() {
        let mut solver = Solver::new();
        solver.add_clause([-1, 2]);
        solver.add_clause([-3, -2, 4]);
        solver.add_clause([-4, 5]);
        solver.add_clause([-4, -5, -2]);

        solver.new_decision_level();
        solver.assert_literal(lit(1), Reason::Decision);
        solver.propagate();
        solver.new_decision_level();
        solver.assert_literal(lit(3), Reason::Decision);
        let conflict = solver.propagate().expect("conflict expected");

        let (learnt, backjump_level) = solver.analyze(conflict);
        solver.trim_to_level(backjump_level);

        // Position 0 is open again and every other literal is false: the
        // learned clause is unit exactly as required.
        assert_eq!(solver.lit_value(learnt[0]), Tribool::Undef);
        for &other in &learnt[1..] {
            assert_eq!(solver.lit_value(other), Tribool::False);
        }
        assert!(solver.is_unit(&learnt, learnt[0]));
    }
}
