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

//! This module provides the cost matrix which implicitly defines the weighted
//! complete bipartite graph G=(V,U,E) of an assignment problem.

use std::ops::{Deref, Index};

use crate::{AssignmentError, AssignmentResult, Cost};

/// A square n*n matrix of costs, stored row major. Entry (i, j) is the cost
/// of assigning row i (vertex i of V) to column j (vertex n+j of U).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostMatrix<C: Cost> {
    n: usize,
    data: Vec<C>,
}

impl<C: Cost> CostMatrix<C> {
    /// Creates an n*n matrix from a flat, row major buffer of n*n costs
    pub fn new(n: usize, data: Vec<C>) -> AssignmentResult<Self> {
        if n == 0 {
            return Err(AssignmentError::EmptyMatrix);
        }
        if data.len() != n * n {
            return Err(AssignmentError::DimensionMismatch {
                expected: n * n,
                found: data.len(),
            });
        }
        Ok(Self { n, data })
    }
    /// Creates a matrix from its rows. Every row must have as many entries
    /// as there are rows.
    pub fn from_rows(rows: Vec<Vec<C>>) -> AssignmentResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(AssignmentError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(n * n);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(AssignmentError::NotSquare {
                    row,
                    expected: n,
                    found: entries.len(),
                });
            }
            data.extend(entries);
        }
        Ok(Self { n, data })
    }
    /// Returns n, the number of rows (and columns) of the matrix
    pub fn size(&self) -> usize {
        self.n
    }
    /// Returns the cost of the edge between row `row` and column `col`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C {
        self.data[row * self.n + col]
    }
    /// Returns the costs of the given row
    pub fn row(&self, row: usize) -> &[C] {
        &self.data[row * self.n..(row + 1) * self.n]
    }
    /// Returns the raw, row major costs
    pub fn as_slice(&self) -> &[C] {
        &self.data
    }
    /// Makes sure the matrix is a legal input for the Hungarian method: all
    /// costs must be non-negative and must remain representable once doubled
    /// (strictly below the slack sentinel).
    pub(crate) fn validate(&self) -> AssignmentResult<()> {
        for (k, &cost) in self.data.iter().enumerate() {
            let (row, col) = (k / self.n, k % self.n);
            if cost < C::zero() {
                return Err(AssignmentError::NegativeCost { row, col });
            }
            match cost.checked_double() {
                Some(doubled) if doubled < C::infinity() => {}
                _ => return Err(AssignmentError::CostOverflow { row, col }),
            }
        }
        Ok(())
    }
    /// Doubles every cost of the matrix. The costs are halved back to their
    /// original values when the returned guard is dropped, whichever way the
    /// solve ends.
    ///
    /// # Note
    /// The matrix must have been validated beforehand.
    pub(crate) fn doubled(&mut self) -> DoubledCosts<'_, C> {
        for cost in self.data.iter_mut() {
            *cost = *cost + *cost;
        }
        DoubledCosts { matrix: self }
    }
}

impl<C: Cost> Index<(usize, usize)> for CostMatrix<C> {
    type Output = C;

    fn index(&self, (row, col): (usize, usize)) -> &C {
        &self.data[row * self.n + col]
    }
}

/// A scope guard giving a read access to the doubled costs of a matrix and
/// restoring the original costs on drop.
pub(crate) struct DoubledCosts<'a, C: Cost> {
    matrix: &'a mut CostMatrix<C>,
}

impl<C: Cost> Deref for DoubledCosts<'_, C> {
    type Target = CostMatrix<C>;

    fn deref(&self) -> &CostMatrix<C> {
        self.matrix
    }
}

impl<C: Cost> Drop for DoubledCosts<'_, C> {
    fn drop(&mut self) {
        for cost in self.matrix.data.iter_mut() {
            *cost = cost.halve();
        }
    }
}

#[cfg(test)]
mod test_matrix {
    use crate::prelude::*;

    #[test]
    fn from_rows_lays_the_costs_out_row_major() {
        let matrix = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(2, matrix.size());
        assert_eq!(&[1, 2, 3, 4], matrix.as_slice());
        assert_eq!(3, matrix.get(1, 0));
        assert_eq!(2, matrix[(0, 1)]);
        assert_eq!(&[3, 4], matrix.row(1));
    }

    #[test]
    fn empty_matrices_are_rejected() {
        assert_eq!(
            Err(AssignmentError::EmptyMatrix),
            CostMatrix::<i32>::from_rows(vec![])
        );
        assert_eq!(
            Err(AssignmentError::EmptyMatrix),
            CostMatrix::<i32>::new(0, vec![])
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = CostMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            AssignmentError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            },
            err
        );
    }

    #[test]
    fn flat_buffers_must_hold_n_squared_costs() {
        let err = CostMatrix::new(2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            AssignmentError::DimensionMismatch {
                expected: 4,
                found: 3
            },
            err
        );
    }

    #[test]
    fn validation_rejects_negative_costs() {
        let matrix = CostMatrix::from_rows(vec![vec![1, 2], vec![-3, 4]]).unwrap();
        assert_eq!(
            Err(AssignmentError::NegativeCost { row: 1, col: 0 }),
            matrix.validate()
        );
    }

    #[test]
    fn validation_rejects_costs_that_cannot_be_doubled() {
        let matrix = CostMatrix::from_rows(vec![vec![1i8, 64], vec![3, 4]]).unwrap();
        assert_eq!(
            Err(AssignmentError::CostOverflow { row: 0, col: 1 }),
            matrix.validate()
        );
        let matrix = CostMatrix::from_rows(vec![vec![1i8, 63], vec![3, 4]]).unwrap();
        assert_eq!(Ok(()), matrix.validate());
    }

    #[test]
    fn doubled_costs_are_restored_on_drop() {
        let mut matrix = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 5]]).unwrap();
        {
            let doubled = matrix.doubled();
            assert_eq!(&[2, 4, 6, 10], doubled.as_slice());
        }
        assert_eq!(&[1, 2, 3, 5], matrix.as_slice());
    }
}
