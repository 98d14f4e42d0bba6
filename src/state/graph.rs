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

//! This module builds the equality subgraph induced by the current duals and
//! the auxiliary graph the search walks through.

use crate::{AssignmentError, AssignmentResult, Cost, CostMatrix};

use super::WorkingState;

/// The arcs of the auxiliary graph. An arc (v, w) between two rows means
/// that v is tight with some column u currently matched with w: when v gets
/// labeled, w can inherit that label through u.
///
/// The arcs are indexed by their tail (a row) so that expanding a row only
/// ever looks at the arcs leaving it. Arcs sharing a tail keep their
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct ArcList {
    heads: Vec<Vec<usize>>,
    len: usize,
}

impl ArcList {
    /// Creates an empty arc list for the n rows of a problem
    pub(crate) fn with_capacity(n: usize) -> AssignmentResult<Self> {
        let mut heads = Vec::new();
        heads
            .try_reserve_exact(n)
            .map_err(|_| AssignmentError::Allocation { what: "arc" })?;
        heads.resize_with(n, Vec::new);
        Ok(Self { heads, len: 0 })
    }
    /// Removes all arcs (the memory is kept for the next stage)
    pub(crate) fn clear(&mut self) {
        for heads in self.heads.iter_mut() {
            heads.clear();
        }
        self.len = 0;
    }
    /// Adds the arc (tail, head)
    pub(crate) fn add(&mut self, tail: usize, head: usize) {
        self.heads[tail].push(head);
        self.len += 1;
    }
    /// Returns the heads of all arcs leaving `tail`, in insertion order
    pub fn heads(&self, tail: usize) -> &[usize] {
        self.heads.get(tail).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Returns the number of arcs
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns true iff there is no arc at all
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Iterates over all (tail, head) arcs, sorted by tail
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.heads
            .iter()
            .enumerate()
            .flat_map(|(tail, heads)| heads.iter().map(move |&head| (tail, head)))
    }
}

impl<C: Cost> WorkingState<C> {
    /// Returns the reduced cost c(v, u) - alpha[v] - beta[u] of the edge
    /// (v, u), or None when it exceeds the largest value of `C`.
    ///
    /// As the duals are feasible, alpha[v] + beta[u] never exceeds c(v, u):
    /// the only way to overflow is from below, in which case the reduced cost
    /// is above the slack sentinel and the edge is useless to the solver.
    #[inline]
    pub(crate) fn reduced_cost(&self, costs: &CostMatrix<C>, v: usize, u: usize) -> Option<C> {
        let dual = self.alpha[v].checked_add(self.beta[u])?;
        costs.get(v, u).checked_sub(dual)
    }

    /// Returns true iff the edge (v, u) is tight w.r.t. the current duals
    #[inline]
    pub(crate) fn is_tight(&self, costs: &CostMatrix<C>, v: usize, u: usize) -> bool {
        self.reduced_cost(costs, v, u) == Some(C::zero())
    }

    /// Resets the forest and the slacks, then scans the tight edges to
    /// record the exposed columns and the arcs of the auxiliary graph.
    ///
    /// A row may be tight with several single columns; the last one wins as
    /// the pre-search only ever needs one of them.
    pub(crate) fn build_equality_graph(&mut self, costs: &CostMatrix<C>) {
        self.arcs.clear();
        self.exposed.fill(None);
        self.label.fill(None);
        self.count.fill(0);
        self.slack.fill(C::infinity());
        self.nhbor.fill(None);

        for v in 0..self.n {
            for u in 0..self.n {
                if !self.is_tight(costs, v, u) {
                    continue;
                }
                match self.mate_u[u] {
                    None => self.exposed[v] = Some(u),
                    Some(w) if w != v => self.arcs.add(v, w),
                    Some(_) => {}
                }
            }
        }
    }
}
