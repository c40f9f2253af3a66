//! The CDCL solver.

use crate::assign::AssignMap;
use crate::bcp::WatchList;
use crate::clause_db::{ClauseDb, DisplayLits, Reason, VarInfo};
use crate::decision::{BranchingHeuristic, FirstUnassigned};
use crate::trace::{trace, Tracer};
use lodestar_base::{Lit, Tribool};
use std::collections::VecDeque;

/// Counters for the main search events.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverStats {
    /// Number of decisions made.
    pub decisions: u64,
    /// Number of conflicts encountered.
    pub conflicts: u64,
    /// Number of literals asserted by propagation.
    pub propagations: u64,
    /// Number of learned clauses (unit facts included).
    pub learned_clauses: u64,
}

/// A CDCL SAT solver.
///
/// Clauses are added up front as sequences of signed integers (negative =
/// negated, as in DIMACS), then [`Solver::solve`] runs the search. On a
/// `true` verdict the satisfying assignment can be read back with
/// [`Solver::assignments`].
pub struct Solver {
    /// Input and learned clauses of length >= 2.
    pub(crate) clauses: ClauseDb,
    /// Current variable values.
    pub(crate) assigns: AssignMap,
    /// Watcher lists, indexed by literal code.
    pub(crate) watches: WatchList,
    /// Assigned literals in assignment order.
    pub(crate) trail: Vec<Lit>,
    /// Trail index at which each decision level starts.
    pub(crate) trail_lim: Vec<usize>,
    /// Index of the first trail literal not yet propagated.
    pub(crate) qhead: usize,
    /// Reason and level per variable, valid while the variable is assigned.
    pub(crate) varinfo: Vec<VarInfo>,
    /// Conflict-analysis scratch marks.
    pub(crate) seen: Vec<u8>,
    /// Variables that occur in at least one ingested clause.
    pub(crate) active: Vec<bool>,
    /// Count of active variables.
    pub(crate) num_active: usize,
    /// Decision variable selection.
    pub(crate) heuristic: Box<dyn BranchingHeuristic>,
    /// Test hook: literals to decide before consulting the heuristic.
    pub(crate) forced_decisions: VecDeque<Lit>,
    /// Optional trace sink.
    pub(crate) tracer: Option<Box<dyn Tracer>>,
    /// The verdict, once known.
    pub(crate) result: Option<bool>,
    /// Set once solving starts; clause ingestion is rejected afterwards.
    pub(crate) started: bool,
    pub(crate) stats: SolverStats,
}

impl Solver {
    /// Creates an empty solver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clauses: ClauseDb::new(),
            assigns: AssignMap::new(),
            watches: WatchList::new(),
            trail: Vec::new(),
            trail_lim: Vec::new(),
            qhead: 0,
            varinfo: Vec::new(),
            seen: Vec::new(),
            active: Vec::new(),
            num_active: 0,
            heuristic: Box::new(FirstUnassigned),
            forced_decisions: VecDeque::new(),
            tracer: None,
            result: None,
            started: false,
            stats: SolverStats::default(),
        }
    }

    /// Installs a trace sink. Must be done before [`Solver::solve`].
    pub fn set_tracer(&mut self, tracer: Box<dyn Tracer>) {
        self.tracer = Some(tracer);
    }

    /// Replaces the decision heuristic. Must be done before [`Solver::solve`].
    pub fn set_heuristic(&mut self, heuristic: Box<dyn BranchingHeuristic>) {
        self.heuristic = heuristic;
    }

    /// Test hook: fixes the decision sequence. Each literal is decided in
    /// order before the heuristic is consulted. A forced literal that is
    /// already assigned when its turn comes is a bug in the test setup and
    /// panics.
    pub fn force_decisions(&mut self, literals: impl IntoIterator<Item = i64>) {
        self.forced_decisions
            .extend(literals.into_iter().map(Lit::from_dimacs));
    }

    /// Adds a clause given as signed integers (negative = negated).
    ///
    /// Clauses can only be added before [`Solver::solve`] is called.
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = i64>) {
        assert!(
            !self.started,
            "clauses cannot be added after solve() has been called"
        );

        let lits: Vec<Lit> = literals.into_iter().map(Lit::from_dimacs).collect();
        self.ingest(lits);
    }

    /// Adds every clause of a formula. See [`Solver::add_clause`].
    pub fn add_formula(&mut self, clauses: impl IntoIterator<Item = Vec<i64>>) {
        for clause in clauses {
            self.add_clause(clause);
        }
    }

    /// Normalizes and installs one clause.
    fn ingest(&mut self, mut lits: Vec<Lit>) {
        if let Some(max_var) = lits.iter().map(|lit| lit.var()).max() {
            self.grow_to(max_var as usize + 1);
        }

        // Sorting puts x and !x next to each other (x first), so both
        // duplicate and tautology detection reduce to comparing neighbors.
        lits.sort_unstable();

        let mut kept = 0;
        let mut last = Lit::UNDEF;
        for i in 0..lits.len() {
            let current = lits[i];
            if last != Lit::UNDEF && current == last.negate() {
                trace!(self, "add: tautology on variable {}; clause dropped", current.var());
                return;
            }

            // Values here are root-level facts from earlier unit clauses.
            match self.assigns.lit_value(current) {
                Tribool::False => {
                    trace!(self, "add: literal {current} is already false; dropped from clause");
                    continue;
                }
                Tribool::True => {
                    trace!(self, "add: literal {current} is already true; clause dropped");
                    return;
                }
                Tribool::Undef => {}
            }

            if current != last {
                lits[kept] = current;
                kept += 1;
                last = current;
            }
        }
        lits.truncate(kept);

        // An empty clause can never be satisfied.
        if lits.is_empty() {
            trace!(self, "add: empty clause; formula is unsatisfiable");
            self.result = Some(false);
            return;
        }

        for &lit in &lits {
            let var = lit.var() as usize;
            if !self.active[var] {
                self.active[var] = true;
                self.num_active += 1;
            }
        }

        // A unit clause is a root-level fact. Assert it instead of storing
        // it, and propagate right away since it may decide further clauses.
        if lits.len() == 1 {
            trace!(self, "add: unit clause; asserting {}", lits[0]);
            self.assert_literal(lits[0], Reason::Unit);
            if self.propagate().is_some() {
                trace!(self, "add: conflict at level 0; formula is unsatisfiable");
                self.result = Some(false);
            }
            return;
        }

        let clause = self.clauses.add(lits);
        self.watch_clause(clause);
    }

    /// Grows all per-variable state to cover `num_vars` variables.
    fn grow_to(&mut self, num_vars: usize) {
        if self.assigns.num_vars() >= num_vars {
            return;
        }
        self.assigns.grow_to(num_vars);
        self.watches.grow_to(num_vars);
        self.varinfo.resize(num_vars, VarInfo::default());
        self.seen.resize(num_vars, 0);
        self.active.resize(num_vars, false);
    }

    /// Runs the search to completion, returning `true` on satisfiability.
    ///
    /// The verdict is recorded: calling `solve` again returns it without
    /// further work.
    pub fn solve(&mut self) -> bool {
        if let Some(result) = self.result {
            return result;
        }
        self.started = true;

        loop {
            if let Some(conflict) = self.propagate() {
                self.stats.conflicts += 1;
                trace!(self, "conflict in clause {}", self.clauses.display(conflict));

                // A conflict with no decision on the trail cannot be undone.
                if self.decision_level() == 0 {
                    self.result = Some(false);
                    return false;
                }

                let (learnt, backjump_level) = self.analyze(conflict);
                self.stats.learned_clauses += 1;
                trace!(
                    self,
                    "learned {}; backjumping to level {backjump_level}",
                    DisplayLits(&learnt)
                );

                if learnt.len() == 1 {
                    // A learned unit is a permanent fact; install it at the
                    // root instead of storing a clause.
                    self.trim_to_level(0);
                    self.assert_literal(learnt[0], Reason::Unit);
                } else {
                    let clause = self.clauses.add(learnt);
                    self.watch_clause(clause);
                    self.trim_to_level(backjump_level);
                    let asserting = self.clauses.lits(clause)[0];
                    self.assert_literal(asserting, Reason::Clause(clause));
                }
            } else if let Some(decision) = self.next_decision() {
                self.stats.decisions += 1;
                trace!(self, "decide {decision} at level {}", self.decision_level() + 1);
                self.new_decision_level();
                self.assert_literal(decision, Reason::Decision);
            } else {
                // No conflict and nothing left to decide: the assignment is
                // total over the active variables.
                self.result = Some(true);
                return true;
            }
        }
    }

    /// Picks the next decision literal, or `None` when every active variable
    /// is assigned.
    fn next_decision(&mut self) -> Option<Lit> {
        if let Some(forced) = self.forced_decisions.pop_front() {
            assert!(
                self.assigns.lit_value(forced) == Tribool::Undef,
                "forced decision literal {forced} is already assigned"
            );
            return Some(forced);
        }

        self.heuristic
            .pick(&self.assigns, &self.active)
            .map(|var| Lit::new(var, false))
    }

    /// Number of distinct variables across the ingested clauses.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_active
    }

    /// Number of stored clauses, learned clauses included.
    #[must_use]
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns solver statistics.
    #[must_use]
    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    pub(crate) fn emit_trace(&mut self, line: &str) {
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.line(line);
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
