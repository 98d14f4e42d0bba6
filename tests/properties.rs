use hungarian_rs::prelude::*;
use proptest::prelude::*;

fn square(n: usize, costs: Vec<i64>) -> CostMatrix<i64> {
    CostMatrix::new(n, costs).unwrap()
}

fn instance() -> impl Strategy<Value = (usize, Vec<i64>)> {
    (1usize..7).prop_flat_map(|n| (Just(n), prop::collection::vec(0i64..1_000, n * n)))
}

proptest! {
    #[test]
    fn every_vertex_gets_exactly_one_partner((n, costs) in instance()) {
        let mut matrix = square(n, costs);
        let matching = solve_assignment(&mut matrix).unwrap();
        prop_assert!(matching.is_perfect());
        prop_assert_eq!(2 * n, matching.mate().len());
        for v in 0..2 * n {
            prop_assert_eq!(v, matching.partner(matching.partner(v)));
        }
    }

    #[test]
    fn the_costs_are_restored_bit_for_bit((n, costs) in instance()) {
        let mut matrix = square(n, costs.clone());
        solve_assignment(&mut matrix).unwrap();
        prop_assert_eq!(costs.as_slice(), matrix.as_slice());
    }

    #[test]
    fn repeated_solves_yield_the_same_cost((n, costs) in instance()) {
        let mut matrix = square(n, costs);
        let first = solve_assignment(&mut matrix).unwrap().cost(&matrix);
        let second = solve_assignment(&mut matrix).unwrap().cost(&matrix);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scaling_the_costs_scales_the_optimum((n, costs) in instance(), k in 1i64..10) {
        let mut matrix = square(n, costs.clone());
        let mut scaled = square(n, costs.iter().map(|c| c * k).collect());

        let optimum = solve_assignment(&mut matrix).unwrap().cost(&matrix).unwrap();
        let matching = solve_assignment(&mut scaled).unwrap();
        prop_assert_eq!(Ok(k * optimum), matching.cost(&scaled));
        // an optimal matching of the scaled problem is optimal for the original
        prop_assert_eq!(Ok(optimum), matching.cost(&matrix));
    }

    #[test]
    fn the_optimum_is_certified((n, costs) in instance()) {
        let mut matrix = square(n, costs);
        let certified = Hungarian::new(&mut matrix).verify_optimum(true).solve();
        prop_assert!(certified.is_ok());
    }

    #[test]
    fn negative_costs_are_rejected((n, costs) in instance(), at in 0usize..36) {
        let mut costs = costs;
        let at = at % (n * n);
        costs[at] = -1;
        let mut matrix = square(n, costs.clone());
        prop_assert_eq!(
            Err(AssignmentError::NegativeCost { row: at / n, col: at % n }),
            solve_assignment(&mut matrix)
        );
        prop_assert_eq!(costs.as_slice(), matrix.as_slice());
    }
}
