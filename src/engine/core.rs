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

//! This module provides the definition of the solver's core abstractions
//! (vertices, matchings and the errors a solve can end with).

use crate::{Cost, CostMatrix};

/// A vertex of the complete bipartite graph G=(V,U,E). With n = |V| = |U|,
/// the vertices of V are numbered 0..n and those of U are numbered n..2n.
/// (Row `i` of the cost matrix is vertex `i` and column `j` is vertex `n+j`).
pub type Vertex = usize;

/// This is the kind of error that gets raised whenever an assignment problem
/// cannot be solved.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq, Hash)]
pub enum AssignmentError {
    /// A cost matrix needs at least one row
    #[error("the cost matrix is empty")]
    EmptyMatrix,
    /// One of the rows given to build the matrix does not have n entries
    #[error("row {row} has {found} entries where {expected} were expected")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The flat buffer given to build the matrix does not hold n*n entries
    #[error("expected {expected} cost entries but found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// The Hungarian method only accepts non-negative costs
    #[error("the cost at ({row}, {col}) is negative")]
    NegativeCost { row: usize, col: usize },
    /// The costs are doubled while solving; this one would not fit
    #[error("the cost at ({row}, {col}) is too large to be doubled")]
    CostOverflow { row: usize, col: usize },
    /// Some dual variable left the range of the cost type while solving
    #[error("the dual of vertex {vertex} overflows during stage {stage}")]
    DualOverflow { stage: usize, vertex: Vertex },
    /// The total cost of an assignment is not representable
    #[error("the total cost of the assignment overflows")]
    TotalOverflow,
    /// Some working table could not be allocated
    #[error("could not allocate the {what} table")]
    Allocation { what: &'static str },
    /// The dual adjustment found no positive finite slack
    #[error("no positive slack left to adjust the duals during stage {stage}")]
    NoPositiveSlack { stage: usize },
    /// The alternating path followed during an augmentation is broken
    #[error("the alternating path is broken at vertex {vertex}")]
    BrokenPath { vertex: Vertex },
    /// A row is still single after all stages have run
    #[error("row {row} is left unmatched")]
    Unmatched { row: usize },
    /// The optimality check found an edge violating its dual constraint
    #[error("the dual constraint of edge ({row}, {col}) is violated")]
    InfeasibleDual { row: usize, col: usize },
    /// The optimality check found a matched edge with a positive slack
    #[error("the matched edge ({row}, {col}) is not tight")]
    LooseMatch { row: usize, col: usize },
}

/// The result of a solver operation.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// A perfect matching between the rows (V) and the columns (U) of a cost
/// matrix. This is what a successful solve returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matching {
    /// n = |V| = |U|
    n: usize,
    /// mate[v] is the vertex matched with v (for all 2n vertices)
    mate: Vec<Vertex>,
}

impl Matching {
    /// Creates the matching where row `i` is assigned to column `columns[i]`.
    /// The caller is responsible for passing a permutation of 0..n
    pub(crate) fn from_columns(columns: &[usize]) -> Self {
        let n = columns.len();
        let mut mate = vec![0; 2 * n];
        for (row, &col) in columns.iter().enumerate() {
            mate[row] = n + col;
            mate[n + col] = row;
        }
        Self { n, mate }
    }
    /// Returns n, the number of matched pairs
    pub fn size(&self) -> usize {
        self.n
    }
    /// Returns the mate table: `mate()[v]` is the partner of vertex `v`,
    /// for every v in 0..2n. An edge (v,u) belongs to the matching iff
    /// `(v, mate[v]) == (mate[u], u)`.
    pub fn mate(&self) -> &[Vertex] {
        &self.mate
    }
    /// Returns the partner of the given vertex
    pub fn partner(&self, vertex: Vertex) -> Vertex {
        self.mate[vertex]
    }
    /// Returns the column assigned to the given row
    pub fn column_of(&self, row: usize) -> usize {
        self.mate[row] - self.n
    }
    /// Returns the row assigned to the given column
    pub fn row_of(&self, col: usize) -> usize {
        self.mate[self.n + col]
    }
    /// Iterates over the (row, column) pairs of the matching, by row
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.n).map(move |row| (row, self.column_of(row)))
    }
    /// Returns the total cost of this matching w.r.t. the given matrix.
    ///
    /// # Errors
    /// Fails with [`AssignmentError::TotalOverflow`] when the sum does not
    /// fit in `C` (every entry fitting does not make the total fit).
    pub fn cost<C: Cost>(&self, matrix: &CostMatrix<C>) -> AssignmentResult<C> {
        self.pairs().try_fold(C::zero(), |total, (row, col)| {
            total
                .checked_add(matrix[(row, col)])
                .ok_or(AssignmentError::TotalOverflow)
        })
    }
    /// Returns true iff the mate table is a symmetric bijection between V and U
    pub fn is_perfect(&self) -> bool {
        let n = self.n;
        let mut seen = vec![false; n];
        for v in 0..n {
            let u = self.mate[v];
            if u < n || u >= 2 * n || self.mate[u] != v || seen[u - n] {
                return false;
            }
            seen[u - n] = true;
        }
        true
    }
}
