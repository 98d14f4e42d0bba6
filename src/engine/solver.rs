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

//! This module provides the solver itself: the driver of the Hungarian method
//! as described in Section 11.2 (Figure 11-2) of "Combinatorial Optimization:
//! Algorithms and Complexity" by Papadimitriou and Steiglitz.

use log::{debug, trace};

use crate::state::{SearchOutcome, WorkingState};
use crate::{AssignmentResult, Cost, CostMatrix, Matching, Observer, SolverEvent};

/// Solves the assignment problem defined by the given cost matrix with the
/// default settings. See [`Hungarian::solve`].
pub fn solve_assignment<C: Cost>(matrix: &mut CostMatrix<C>) -> AssignmentResult<Matching> {
    Hungarian::new(matrix).solve()
}

/// The Hungarian method solver. It finds a perfect matching of minimum cost
/// in the complete bipartite graph defined by a cost matrix.
///
/// The matrix is borrowed mutably because its costs are doubled for the
/// duration of the solve (this keeps all dual variables integral even though
/// the dual adjustment halves the slacks). The original costs are always
/// restored before the solver returns.
pub struct Hungarian<'a, C: Cost> {
    /// The costs of the problem
    matrix: &'a mut CostMatrix<C>,
    /// Check the optimality certificate once the matching is complete ?
    verify: bool,
    /// Who gets notified of the solver progress (if anyone)
    observer: Option<&'a mut dyn Observer<C>>,
}

impl<'a, C: Cost> Hungarian<'a, C> {
    /// Creates a new solver for the given matrix
    pub fn new(matrix: &'a mut CostMatrix<C>) -> Self {
        Self {
            matrix,
            verify: false,
            observer: None,
        }
    }
    /// When set, the solver checks that its final duals form a certificate of
    /// optimality for the matching it found (dual feasibility of every edge
    /// and tightness of every matched edge). This costs O(n^2).
    pub fn verify_optimum(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
    /// Registers an observer that gets notified of the solver progress
    pub fn observer(mut self, observer: &'a mut dyn Observer<C>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Solves the problem and returns an optimal perfect matching.
    ///
    /// # Errors
    /// The input is rejected when it holds a negative cost or a cost that is
    /// too large to be doubled. An error is also raised when the working
    /// state cannot be allocated, when a dual variable leaves the range of
    /// `C` ([`AssignmentError::DualOverflow`], see below) or when an
    /// invariant of the method breaks. In all cases, the matrix is left
    /// untouched.
    ///
    /// # Note
    /// The duals may drift well beyond the costs. With M the largest doubled
    /// cost, a solve never overflows as long as (n^2/2 + n + 2) * M fits in
    /// `C`. Pick a wider cost type when that is not the case.
    pub fn solve(self) -> AssignmentResult<Matching> {
        let Hungarian {
            matrix,
            verify,
            mut observer,
        } = self;

        let n = matrix.size();
        matrix.validate()?;
        let mut state = WorkingState::allocate(n)?;
        debug!("solving a {n}x{n} assignment problem");

        let costs = matrix.doubled();
        state.initialize(&costs);

        let mut modifications = 0;
        for stage in 1..=n {
            state.build_equality_graph(&costs);
            trace!("stage {stage}: {} arcs in the auxiliary graph", state.arcs.len());
            notify(&mut observer, SolverEvent::EqualityGraphBuilt, &state, stage);

            let mut outcome = state.pre_search(&costs)?;
            while outcome == SearchOutcome::Exhausted {
                outcome = state.search(&costs)?;
                if outcome == SearchOutcome::Exhausted {
                    let (theta, after) = state.modify(stage)?;
                    modifications += 1;
                    notify(&mut observer, SolverEvent::DualsModified { theta }, &state, stage);
                    outcome = after;
                }
            }
            notify(&mut observer, SolverEvent::Augmented, &state, stage);
        }

        if verify {
            state.verify_optimum(&costs)?;
        }
        let matching = state.matching()?;
        debug!("solved in {n} stages and {modifications} dual adjustments");
        Ok(matching)
    }
}

/// Passes the current state to the observer (if there is one)
fn notify<C: Cost>(
    observer: &mut Option<&mut dyn Observer<C>>,
    event: SolverEvent<C>,
    state: &WorkingState<C>,
    stage: usize,
) {
    if let Some(observer) = observer.as_deref_mut() {
        observer.notify(event, &state.snapshot(stage));
    }
}
