//! Boolean constraint propagation with two watched literals.
//!
//! A clause only needs inspection when one of its two watched literals
//! becomes false, so propagation walks the watcher list of each newly
//! asserted literal instead of scanning the whole formula.

use crate::clause_db::{ClauseRef, Reason};
use crate::solver::Solver;
use crate::trace::trace;
use lodestar_base::{Lit, Tribool};

/// One watch entry: a clause and a cached literal from it whose truth
/// makes the clause check unnecessary.
#[derive(Debug, Clone, Copy)]
pub struct Watcher {
    /// The watched clause.
    pub clause: ClauseRef,
    /// The blocker: if this literal is true the clause is satisfied.
    pub blocker: Lit,
}

/// Per-literal watcher lists.
///
/// A watcher for clause `c` lives in the list of `!c[0]` and `!c[1]`: the
/// clause must be revisited exactly when one of its watched literals is
/// falsified, which is when its negation is asserted.
#[derive(Debug, Clone, Default)]
pub struct WatchList {
    lists: Vec<Vec<Watcher>>,
}

impl WatchList {
    /// Creates an empty watch index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures lists exist for both literals of variables `0..num_vars`.
    pub fn grow_to(&mut self, num_vars: usize) {
        if self.lists.len() < num_vars * 2 {
            self.lists.resize_with(num_vars * 2, Vec::new);
        }
    }

    /// Appends a watcher to the list of `lit`.
    pub fn push(&mut self, lit: Lit, watcher: Watcher) {
        self.lists[lit.code() as usize].push(watcher);
    }

    /// The watchers registered for `lit`.
    #[must_use]
    pub fn for_lit(&self, lit: Lit) -> &[Watcher] {
        &self.lists[lit.code() as usize]
    }

    pub(crate) fn list_mut(&mut self, lit: Lit) -> &mut Vec<Watcher> {
        &mut self.lists[lit.code() as usize]
    }

    /// Number of literal buckets.
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.lists.len()
    }
}

impl Solver {
    /// Registers watches for a newly stored clause: the clause is watched
    /// through its first two literals, each with the other as blocker.
    pub(crate) fn watch_clause(&mut self, clause: ClauseRef) {
        let lits = self.clauses.lits(clause);
        let c0 = lits[0];
        let c1 = lits[1];

        trace!(self, "watching clause {}", self.clauses.display(clause));

        self.watches.push(c0.negate(), Watcher { clause, blocker: c1 });
        self.watches.push(c1.negate(), Watcher { clause, blocker: c0 });
    }

    /// Propagates every trail literal the cursor has not reached yet.
    ///
    /// Returns the conflicting clause if one is found, `None` at fixpoint.
    pub(crate) fn propagate(&mut self) -> Option<ClauseRef> {
        while self.qhead < self.trail.len() {
            // p has just become true; every clause watching !p may have
            // gone unit or conflicting.
            let p = self.trail[self.qhead];
            self.qhead += 1;
            let p_neg = p.negate();

            trace!(self, "propagating {p}");

            let mut watchers = std::mem::take(self.watches.list_mut(p));
            let mut conflict = None;
            let mut read = 0;
            let mut write = 0;

            'watchers: while read < watchers.len() {
                let watcher = watchers[read];
                read += 1;

                // Blocker shortcut: the clause is already satisfied.
                if self.assigns.lit_value(watcher.blocker) == Tribool::True {
                    watchers[write] = watcher;
                    write += 1;
                    continue;
                }

                let clause = watcher.clause;

                // Keep the falsified literal at position 1.
                {
                    let lits = self.clauses.lits_mut(clause);
                    if lits[0] == p_neg {
                        lits.swap(0, 1);
                    }
                }
                let first = self.clauses.lits(clause)[0];
                let updated = Watcher { clause, blocker: first };

                // With !p parked at position 1, the clause is satisfied iff
                // its other watched literal is true. The blocker was already
                // checked, so skip the value lookup when they coincide.
                if first != watcher.blocker && self.assigns.lit_value(first) == Tribool::True {
                    watchers[write] = updated;
                    write += 1;
                    continue;
                }

                // Look for a replacement watch among the tail literals: any
                // literal not currently false can take over from !p.
                let len = self.clauses.lits(clause).len();
                for k in 2..len {
                    let candidate = self.clauses.lits(clause)[k];
                    if self.assigns.lit_value(candidate) != Tribool::False {
                        self.clauses.lits_mut(clause).swap(1, k);
                        self.watches.push(candidate.negate(), updated);
                        trace!(
                            self,
                            "watch moved to {candidate} in clause {}",
                            self.clauses.display(clause)
                        );
                        continue 'watchers;
                    }
                }

                // Every tail literal is false: the clause is unit in `first`,
                // or conflicting if `first` is false too.
                watchers[write] = updated;
                write += 1;

                if self.assigns.lit_value(first) == Tribool::False {
                    // Keep the watchers not visited yet before bailing out.
                    while read < watchers.len() {
                        watchers[write] = watchers[read];
                        write += 1;
                        read += 1;
                    }
                    self.qhead = self.trail.len();
                    conflict = Some(clause);
                    break;
                }

                debug_assert!(self.is_unit(self.clauses.lits(clause), first));
                trace!(
                    self,
                    "asserting unit {first} from clause {}",
                    self.clauses.display(clause)
                );
                self.stats.propagations += 1;
                self.assert_literal(first, Reason::Clause(clause));
            }

            watchers.truncate(write);
            *self.watches.list_mut(p) = watchers;

            if conflict.is_some() {
                return conflict;
            }
        }

        None
    }

    /// Diagnostic: `clause` is unit in `u` iff `u`'s variable is unassigned
    /// and every other literal is false.
    #[must_use]
    pub fn is_unit(&self, clause: &[Lit], u: Lit) -> bool {
        if self.assigns.value(u.var()) != Tribool::Undef {
            return false;
        }

        clause
            .iter()
            .all(|&lit| lit.var() == u.var() || self.assigns.lit_value(lit) == Tribool::False)
    }
}
