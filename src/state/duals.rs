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

//! This module maintains the dual variables alpha (rows) and beta (columns).
//!
//! # Note
//! The dual adjustment departs from Figure 11-2 of Papadimitriou & Steiglitz
//! in three places, all of which are needed for the method to be optimal:
//! * a row counts as labeled whenever count[v] > 0, even when it has never
//!   been given a label by the search;
//! * when the slack of a matched column drops to zero, nhbor[u] is pushed
//!   (the tail of the new arc) and not mate[u];
//! * in that same case, mate[u] is *not* labeled. Labeling it would hide the
//!   new arc from the next search.

use log::trace;

use crate::{AssignmentError, AssignmentResult, Cost, CostMatrix};

use super::{SearchOutcome, WorkingState};

impl<C: Cost> WorkingState<C> {
    /// Sets up a feasible dual solution and an empty matching:
    /// alpha[v] = 0 and beta[u] is the least cost of column u.
    pub(crate) fn initialize(&mut self, costs: &CostMatrix<C>) {
        self.mate_v.fill(None);
        self.mate_u.fill(None);
        self.alpha.fill(C::zero());
        for u in 0..self.n {
            self.beta[u] = (0..self.n)
                .map(|v| costs.get(v, u))
                .min()
                .unwrap_or_else(C::zero);
        }
    }

    /// Returns half the least positive finite slack, if there is one
    fn theta(&self) -> Option<C> {
        self.slack
            .iter()
            .copied()
            .filter(|&slack| slack > C::zero() && slack < C::infinity())
            .min()
            .map(C::halve)
            .filter(|&theta| theta > C::zero())
    }

    /// Shifts the duals by theta so that at least one more edge becomes tight
    /// between the forest and a column. When that column is single, the
    /// matching is augmented right away. Otherwise the new arc is recorded and
    /// its tail is stacked for the next search.
    ///
    /// Returns theta along with the outcome of the adjustment. Fails with
    /// [`AssignmentError::DualOverflow`] when a shifted dual does not fit in
    /// `C`; the state is then left half adjusted and must be dropped.
    pub(crate) fn modify(&mut self, stage: usize) -> AssignmentResult<(C, SearchOutcome)> {
        let theta = self
            .theta()
            .ok_or(AssignmentError::NoPositiveSlack { stage })?;
        trace!("stage {stage}: shifting the duals by {theta}");

        for v in 0..self.n {
            let shifted = if self.label[v].is_some() || self.count[v] > 0 {
                self.alpha[v].checked_add(theta)
            } else {
                self.alpha[v].checked_sub(theta)
            };
            self.alpha[v] = shifted.ok_or(AssignmentError::DualOverflow { stage, vertex: v })?;
        }
        for u in 0..self.n {
            let shifted = if self.slack[u] == C::zero() {
                self.beta[u].checked_sub(theta)
            } else {
                self.beta[u].checked_add(theta)
            };
            self.beta[u] = shifted.ok_or(AssignmentError::DualOverflow {
                stage,
                vertex: self.n + u,
            })?;
        }

        for u in 0..self.n {
            if self.slack[u] <= C::zero() || self.slack[u] == C::infinity() {
                continue;
            }
            self.slack[u] -= theta + theta;
            if self.slack[u] != C::zero() {
                continue;
            }
            let v = self.nhbor[u].ok_or(AssignmentError::BrokenPath {
                vertex: self.n + u,
            })?;
            match self.mate_u[u] {
                None => {
                    self.exposed[v] = Some(u);
                    self.augment(v)?;
                    return Ok((theta, SearchOutcome::Augmented));
                }
                Some(mate) => {
                    self.stack.push(v);
                    self.arcs.add(v, mate);
                }
            }
        }
        Ok((theta, SearchOutcome::Exhausted))
    }
}
