//
// hungarian-rs is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License  v3
// as published by the Free Software Foundation.
//
// hungarian-rs is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY.
// See the GNU Lesser General Public License  for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with hungarian-rs. If not, see http://www.gnu.org/licenses/lgpl-3.0.en.html
//
// Copyright (c)  2022 by X. Gillard
//

//! The state module comprises the working state of one invocation of the
//! Hungarian method (Papadimitriou & Steiglitz, "Combinatorial Optimization:
//! Algorithms and Complexity", Figure 11-2).
//!
//! # Note
//! All the tables are plain vectors indexed by position. Rows (the vertices
//! of V) index `alpha`, `count`, `exposed`, `label` and `mate_v`. Columns (the
//! vertices of U, shifted down by n) index `beta`, `slack`, `nhbor` and
//! `mate_u`. Nothing here outlives a call to the solver.
//!
//! The behavior of the method is split over three files:
//! * `duals` initializes and adjusts the dual variables (procedure modify),
//! * `graph` builds the equality subgraph of the current duals,
//! * `search` grows the labeling forest and augments the matching.

mod duals;
mod graph;
mod search;

pub use graph::ArcList;
pub(crate) use search::SearchOutcome;

use crate::{AssignmentError, AssignmentResult, Cost, CostMatrix, Matching, Snapshot};

/// The working state of one solve
pub(crate) struct WorkingState<C: Cost> {
    /// n = |V| = |U|
    pub(crate) n: usize,
    /// mate_v[v] is the column matched with row v (if any)
    pub(crate) mate_v: Vec<Option<usize>>,
    /// mate_u[u] is the row matched with column u (if any)
    pub(crate) mate_u: Vec<Option<usize>>,
    /// The dual variables of the rows
    pub(crate) alpha: Vec<C>,
    /// The dual variables of the columns
    pub(crate) beta: Vec<C>,
    /// slack[u] is the least reduced cost of an edge between the forest and u
    pub(crate) slack: Vec<C>,
    /// nhbor[u] is the forest vertex realizing slack[u]
    pub(crate) nhbor: Vec<Option<usize>>,
    /// count[v] is the number of columns u having nhbor[u] == v
    pub(crate) count: Vec<usize>,
    /// exposed[v] is a single column u such that (v, u) is tight
    pub(crate) exposed: Vec<Option<usize>>,
    /// label[v] is the predecessor of v in the forest (None for the roots)
    pub(crate) label: Vec<Option<usize>>,
    /// The arcs of the auxiliary graph
    pub(crate) arcs: ArcList,
    /// The rows waiting to be expanded by the search
    pub(crate) stack: Vec<usize>,
}

/// Allocates a table of n copies of `value` without aborting when the memory
/// is not available.
fn table<T: Clone>(n: usize, value: T, what: &'static str) -> AssignmentResult<Vec<T>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(n)
        .map_err(|_| AssignmentError::Allocation { what })?;
    table.resize(n, value);
    Ok(table)
}

impl<C: Cost> WorkingState<C> {
    /// Allocates all the tables needed to solve an n*n problem. Either every
    /// table is allocated or none of them is.
    pub(crate) fn allocate(n: usize) -> AssignmentResult<Self> {
        let mut stack = Vec::new();
        stack
            .try_reserve_exact(n)
            .map_err(|_| AssignmentError::Allocation { what: "stack" })?;

        Ok(Self {
            n,
            mate_v: table(n, None, "row mate")?,
            mate_u: table(n, None, "column mate")?,
            alpha: table(n, C::zero(), "alpha")?,
            beta: table(n, C::zero(), "beta")?,
            slack: table(n, C::infinity(), "slack")?,
            nhbor: table(n, None, "nhbor")?,
            count: table(n, 0, "count")?,
            exposed: table(n, None, "exposed")?,
            label: table(n, None, "label")?,
            arcs: ArcList::with_capacity(n)?,
            stack,
        })
    }

    /// Returns the matching found by the solver. This fails if some row is
    /// still single.
    pub(crate) fn matching(&self) -> AssignmentResult<Matching> {
        let mut columns = Vec::with_capacity(self.n);
        for (row, col) in self.mate_v.iter().enumerate() {
            columns.push(col.ok_or(AssignmentError::Unmatched { row })?);
        }
        Ok(Matching::from_columns(&columns))
    }

    /// Returns a read only view of the current state
    pub(crate) fn snapshot(&self, stage: usize) -> Snapshot<'_, C> {
        Snapshot {
            stage,
            alpha: &self.alpha,
            beta: &self.beta,
            slack: &self.slack,
            nhbor: &self.nhbor,
            count: &self.count,
            exposed: &self.exposed,
            label: &self.label,
            mate: &self.mate_v,
            arcs: &self.arcs,
            stack: &self.stack,
        }
    }

    /// Verifies that the optimum has been reached. That is:
    /// 0. every row is matched,
    /// 1. all edges satisfy their dual constraint alpha[v] + beta[u] <= c(v, u),
    /// 2. all matched edges are tight.
    ///
    /// Together, these make (alpha, beta) a certificate of optimality.
    pub(crate) fn verify_optimum(&self, costs: &CostMatrix<C>) -> AssignmentResult<()> {
        for v in 0..self.n {
            let mate = self.mate_v[v].ok_or(AssignmentError::Unmatched { row: v })?;
            for u in 0..self.n {
                // a sum of duals beyond C::MAX is infeasible, one below C::MIN
                // leaves a slack no cost can match
                let Some(dual) = self.alpha[v].checked_add(self.beta[u]) else {
                    if self.alpha[v] > C::zero() {
                        return Err(AssignmentError::InfeasibleDual { row: v, col: u });
                    }
                    if u == mate {
                        return Err(AssignmentError::LooseMatch { row: v, col: u });
                    }
                    continue;
                };
                if dual > costs.get(v, u) {
                    return Err(AssignmentError::InfeasibleDual { row: v, col: u });
                }
                if u == mate && dual != costs.get(v, u) {
                    return Err(AssignmentError::LooseMatch { row: v, col: u });
                }
            }
        }
        Ok(())
    }
}
