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

//! This module provides the hooks one can use to look at the internal state
//! of the solver while it runs. Observing the solver is a debugging aid: it
//! never alters the outcome of a solve.

use log::trace;

use crate::{ArcList, Cost};

/// The points of the solver where an observer gets notified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverEvent<C: Cost> {
    /// The equality subgraph of a new stage has been built
    EqualityGraphBuilt,
    /// The duals have been shifted by `theta` (expressed on doubled costs)
    DualsModified { theta: C },
    /// The matching has grown by one pair, which ends the stage
    Augmented,
}

/// A read only view of the solver state.
///
/// # Note
/// The solver works on doubled costs. Hence, the duals and slacks exposed
/// here are twice the values one would compute by hand on the original
/// matrix.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a, C: Cost> {
    /// The current stage (1-based)
    pub stage: usize,
    /// The row duals
    pub alpha: &'a [C],
    /// The column duals
    pub beta: &'a [C],
    /// The least reduced cost between the forest and each column
    pub slack: &'a [C],
    /// The forest row realizing each slack
    pub nhbor: &'a [Option<usize>],
    /// The number of columns whose slack each row realizes
    pub count: &'a [usize],
    /// The single column each row is tight with (if any)
    pub exposed: &'a [Option<usize>],
    /// The predecessor of each row in the forest
    pub label: &'a [Option<usize>],
    /// The column matched with each row (if any)
    pub mate: &'a [Option<usize>],
    /// The arcs of the auxiliary graph
    pub arcs: &'a ArcList,
    /// The rows waiting to be expanded
    pub stack: &'a [usize],
}

/// An observer gets notified of the solver progress
pub trait Observer<C: Cost> {
    /// Called by the solver each time the given event occurs
    fn notify(&mut self, event: SolverEvent<C>, snapshot: &Snapshot<'_, C>);
}

/// Any closure accepting an event and a snapshot can be an observer.
impl<C: Cost, F: FnMut(SolverEvent<C>, &Snapshot<'_, C>)> Observer<C> for F {
    fn notify(&mut self, event: SolverEvent<C>, snapshot: &Snapshot<'_, C>) {
        self(event, snapshot)
    }
}

/// An observer dumping the whole solver state through the `log` facade (at
/// the trace level).
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl<C: Cost> Observer<C> for TraceObserver {
    fn notify(&mut self, event: SolverEvent<C>, s: &Snapshot<'_, C>) {
        trace!("stage {} -- {:?}", s.stage, event);
        trace!("  alpha   = {:?}", s.alpha);
        trace!("  beta    = {:?}", s.beta);
        trace!("  slack   = {:?}", s.slack);
        trace!("  nhbor   = {:?}", s.nhbor);
        trace!("  count   = {:?}", s.count);
        trace!("  mate    = {:?}", s.mate);
        trace!("  exposed = {:?}", s.exposed);
        trace!("  label   = {:?}", s.label);
        trace!("  arcs    = {:?}", s.arcs.iter().collect::<Vec<_>>());
        trace!("  stack   = {:?}", s.stack);
    }
}
