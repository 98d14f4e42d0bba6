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

//! # hungarian-rs
//!
//! A lean implementation of the Hungarian method (in its primal-dual form) to
//! solve the linear assignment problem: given an n*n matrix of non-negative
//! integer costs, find a perfect matching between the rows V and the columns
//! U of minimum total cost.
//!
//! The implementation follows Figure 11-2 of "Combinatorial Optimization:
//! Algorithms and Complexity" by Papadimitriou and Steiglitz, with the
//! corrections needed for the method to actually reach the optimum. It runs
//! in n stages; each stage grows the matching by one pair, adjusting the dual
//! variables as often as needed until an augmenting path shows up.
//!
//! ## Quick start
//! ```
//! use hungarian_rs::prelude::*;
//!
//! let mut costs = CostMatrix::from_rows(vec![
//!     vec![7, 2, 1, 9, 4],
//!     vec![9, 6, 9, 5, 5],
//!     vec![3, 8, 3, 1, 8],
//!     vec![7, 9, 4, 2, 2],
//!     vec![8, 4, 7, 4, 8],
//! ])
//! .unwrap();
//!
//! let matching = solve_assignment(&mut costs).unwrap();
//! assert_eq!(matching.cost(&costs), Ok(15));
//! // vertex i of V is matched with vertex n + column_of(i) of U
//! assert_eq!(matching.partner(0), 5 + matching.column_of(0));
//! ```

mod engine;
mod oracle;
mod state;
mod utils;

pub use engine::*;
pub use oracle::*;
pub use state::ArcList;
pub use utils::*;

/// The prelude re-exports everything you need to solve assignment problems
pub mod prelude {
    pub use crate::{
        brute_force_assignment, next_permutation, solve_assignment, ArcList, AssignmentError,
        AssignmentResult, Cost, CostMatrix, Hungarian, Matching, Observer, SolverEvent, Snapshot,
        TraceObserver, Vertex,
    };
}
