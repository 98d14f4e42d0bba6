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

//! An exhaustive search over all the n! perfect matchings of the complete
//! bipartite graph. Only use it for small n (say n <= 10).

use crate::{AssignmentError, AssignmentResult, Cost, CostMatrix, Matching};

/// Solves the assignment problem defined by the given matrix by enumerating
/// all permutations of the columns. Row i is assigned to column pi[i] where
/// pi is the first permutation (in lexicographic order) reaching the least
/// total cost.
///
/// Returns the optimal matching along with its cost. Unlike the Hungarian
/// method, this accepts negative costs.
///
/// # Errors
/// Fails with [`AssignmentError::TotalOverflow`] as soon as the total cost of
/// some assignment does not fit in `C`.
pub fn brute_force_assignment<C: Cost>(matrix: &CostMatrix<C>) -> AssignmentResult<(Matching, C)> {
    let n = matrix.size();
    let mut current = Vec::new();
    let mut best = Vec::new();
    current
        .try_reserve_exact(n)
        .and_then(|_| best.try_reserve_exact(n))
        .map_err(|_| AssignmentError::Allocation { what: "permutation" })?;
    current.extend(0..n);
    best.extend(0..n);

    let mut best_cost = permutation_cost(matrix, &current)?;
    while next_permutation(&mut current) {
        let cost = permutation_cost(matrix, &current)?;
        if cost < best_cost {
            best_cost = cost;
            best.copy_from_slice(&current);
        }
    }
    Ok((Matching::from_columns(&best), best_cost))
}

/// Returns the total cost of assigning row i to column pi[i] for every i
fn permutation_cost<C: Cost>(matrix: &CostMatrix<C>, pi: &[usize]) -> AssignmentResult<C> {
    pi.iter().enumerate().try_fold(C::zero(), |total, (row, &col)| {
        total
            .checked_add(matrix.get(row, col))
            .ok_or(AssignmentError::TotalOverflow)
    })
}

/// Turns pi into its lexicographic successor (Kreher & Stinson, "Combinatorial
/// Algorithms: Generation, Enumeration, and Search", Algorithm 2.14).
/// Returns false, leaving pi untouched, when pi is the last permutation.
pub fn next_permutation(pi: &mut [usize]) -> bool {
    let n = pi.len();
    if n < 2 {
        return false;
    }
    // find the rightmost ascent pi[i] < pi[i+1]
    let mut i = n - 1;
    loop {
        if i == 0 {
            return false;
        }
        i -= 1;
        if pi[i] < pi[i + 1] {
            break;
        }
    }
    // the suffix after i is decreasing: swap pi[i] with its successor there
    let mut j = n - 1;
    while pi[j] < pi[i] {
        j -= 1;
    }
    pi.swap(i, j);
    pi[i + 1..].reverse();
    true
}

#[cfg(test)]
mod test_brute_force {
    use crate::prelude::*;

    #[test]
    fn permutations_come_in_lexicographic_order() {
        let mut pi = vec![0, 1, 2];
        let mut all = vec![pi.clone()];
        while next_permutation(&mut pi) {
            all.push(pi.clone());
        }
        assert_eq!(
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ],
            all
        );
        // the last permutation is left untouched
        assert_eq!(vec![2, 1, 0], pi);
    }

    #[test]
    fn there_are_n_factorial_permutations() {
        let mut pi = (0..6).collect::<Vec<_>>();
        let mut count = 1;
        while next_permutation(&mut pi) {
            count += 1;
        }
        assert_eq!(720, count);
    }

    #[test]
    fn trivial_permutations_have_no_successor() {
        assert!(!next_permutation(&mut []));
        assert!(!next_permutation(&mut [0]));
    }

    #[test]
    fn solves_example_11_1() {
        let matrix = CostMatrix::from_rows(vec![
            vec![7, 2, 1, 9, 4],
            vec![9, 6, 9, 5, 5],
            vec![3, 8, 3, 1, 8],
            vec![7, 9, 4, 2, 2],
            vec![8, 4, 7, 4, 8],
        ])
        .unwrap();
        let (matching, cost) = brute_force_assignment(&matrix).unwrap();
        assert_eq!(15, cost);
        assert_eq!(Ok(15), matching.cost(&matrix));
        assert!(matching.is_perfect());
    }

    #[test]
    fn single_entry_matrix() {
        let matrix = CostMatrix::from_rows(vec![vec![7]]).unwrap();
        let (matching, cost) = brute_force_assignment(&matrix).unwrap();
        assert_eq!(&[1, 0], matching.mate());
        assert_eq!(7, cost);
    }

    #[test]
    fn negative_costs_are_accepted() {
        let matrix = CostMatrix::from_rows(vec![vec![-1, 3], vec![2, -5]]).unwrap();
        let (matching, cost) = brute_force_assignment(&matrix).unwrap();
        assert_eq!(-6, cost);
        assert_eq!(vec![(0, 0), (1, 1)], matching.pairs().collect::<Vec<_>>());
    }

    #[test]
    fn totals_that_do_not_fit_are_reported() {
        let big = i32::MAX / 2 - 1;
        let matrix = CostMatrix::new(3, vec![big; 9]).unwrap();
        assert_eq!(Err(AssignmentError::TotalOverflow), brute_force_assignment(&matrix));
    }

    #[test]
    fn ties_keep_the_first_permutation() {
        let matrix = CostMatrix::new(3, vec![4; 9]).unwrap();
        let (matching, cost) = brute_force_assignment(&matrix).unwrap();
        assert_eq!(12, cost);
        assert_eq!(vec![(0, 0), (1, 1), (2, 2)], matching.pairs().collect::<Vec<_>>());
    }
}
