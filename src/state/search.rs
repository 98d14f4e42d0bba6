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

//! This module provides the search for an augmenting path in the auxiliary
//! graph, and the augmentation of the matching along such a path.

use crate::{AssignmentError, AssignmentResult, Cost, CostMatrix};

use super::WorkingState;

/// How a search (or a dual adjustment) ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SearchOutcome {
    /// The matching has grown by one pair; the stage is over
    Augmented,
    /// The forest cannot grow any further under the current duals
    Exhausted,
}

impl<C: Cost> WorkingState<C> {
    /// Plants the roots of the forest. Every single row is a root, unless it
    /// is tight with a single column in which case the matching is augmented
    /// right away.
    pub(crate) fn pre_search(&mut self, costs: &CostMatrix<C>) -> AssignmentResult<SearchOutcome> {
        self.stack.clear();
        for v in 0..self.n {
            if self.mate_v[v].is_some() {
                continue;
            }
            if self.exposed[v].is_some() {
                self.augment(v)?;
                return Ok(SearchOutcome::Augmented);
            }
            self.stack.push(v);
            self.label[v] = None;
            self.fold_slack(costs, v);
        }
        Ok(SearchOutcome::Exhausted)
    }

    /// Grows the forest by expanding the stacked rows (last in, first out)
    /// until either an augmenting path is found or the stack runs empty.
    pub(crate) fn search(&mut self, costs: &CostMatrix<C>) -> AssignmentResult<SearchOutcome> {
        while let Some(i) = self.stack.pop() {
            let mut k = 0;
            while let Some(&j) = self.arcs.heads(i).get(k) {
                k += 1;
                if self.label[j].is_some() {
                    continue;
                }
                self.label[j] = Some(i);
                if self.exposed[j].is_some() {
                    self.augment(j)?;
                    return Ok(SearchOutcome::Augmented);
                }
                self.stack.push(j);
                self.fold_slack(costs, j);
            }
        }
        Ok(SearchOutcome::Exhausted)
    }

    /// Accounts for the edges of row z, which just joined the forest, in the
    /// slack of every column. Keeps count[] in sync with nhbor[].
    pub(crate) fn fold_slack(&mut self, costs: &CostMatrix<C>, z: usize) {
        for u in 0..self.n {
            let Some(reduced) = self.reduced_cost(costs, z, u) else {
                continue;
            };
            if C::zero() <= reduced && reduced < self.slack[u] {
                self.slack[u] = reduced;
                if let Some(previous) = self.nhbor[u] {
                    self.count[previous] -= 1;
                }
                self.count[z] += 1;
                self.nhbor[u] = Some(z);
            }
        }
    }

    /// Flips the matched and unmatched edges along the alternating path that
    /// ends in row v (whose exposed column is the end of the path) and goes
    /// back to a root of the forest through the labels.
    pub(crate) fn augment(&mut self, mut v: usize) -> AssignmentResult<()> {
        while let Some(previous) = self.label[v] {
            self.exposed[previous] = self.mate_v[v];
            self.match_exposed(v)?;
            v = previous;
        }
        self.match_exposed(v)
    }

    /// Matches row v with its exposed column
    fn match_exposed(&mut self, v: usize) -> AssignmentResult<()> {
        let u = self.exposed[v].ok_or(AssignmentError::BrokenPath { vertex: v })?;
        self.mate_v[v] = Some(u);
        self.mate_u[u] = Some(v);
        Ok(())
    }
}
