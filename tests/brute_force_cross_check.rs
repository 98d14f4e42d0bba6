use hungarian_rs::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const NUM_TESTS: usize = 1000;
const MAX_DIM: usize = 8;
const MAX_COST: i32 = 100;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An n*n matrix with costs drawn uniformly in 1..=MAX_COST
fn random_matrix(rng: &mut ChaCha8Rng, n: usize) -> CostMatrix<i32> {
    let data = (0..n * n).map(|_| rng.gen_range(1..=MAX_COST)).collect();
    CostMatrix::new(n, data).unwrap()
}

#[test]
fn hungarian_method_agrees_with_brute_force() {
    init();
    let mut rng = ChaCha8Rng::seed_from_u64(2010);
    let mut num_pass = 0;
    for test in 0..NUM_TESTS {
        let n = 1 + test % MAX_DIM;
        let mut matrix = random_matrix(&mut rng, n);
        let before = matrix.clone();

        let (_, bf_cost) = brute_force_assignment(&matrix).unwrap();
        let matching = Hungarian::new(&mut matrix)
            .verify_optimum(true)
            .solve()
            .unwrap();

        assert_eq!(before, matrix, "test {test}: the costs were not restored");
        assert!(matching.is_perfect(), "test {test}: not a perfect matching");
        if matching.cost(&matrix) == Ok(bf_cost) {
            num_pass += 1;
        }
    }
    assert_eq!(NUM_TESTS, num_pass);
}

#[test]
fn full_size_instances_agree_with_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..50 {
        let mut matrix = random_matrix(&mut rng, MAX_DIM);
        let (_, bf_cost) = brute_force_assignment(&matrix).unwrap();
        let matching = solve_assignment(&mut matrix).unwrap();
        assert_eq!(Ok(bf_cost), matching.cost(&matrix));
    }
}

#[test]
fn small_cost_ranges_with_many_ties_agree_with_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for test in 0..300 {
        let n = 2 + test % 5;
        let data = (0..n * n).map(|_| rng.gen_range(0..=3i64)).collect();
        let mut matrix = CostMatrix::new(n, data).unwrap();
        let (_, bf_cost) = brute_force_assignment(&matrix).unwrap();
        let matching = Hungarian::new(&mut matrix)
            .verify_optimum(true)
            .solve()
            .unwrap();
        assert_eq!(Ok(bf_cost), matching.cost(&matrix), "test {test}");
    }
}

#[test]
fn near_limit_costs_are_solved_or_reported() {
    init();
    let mut rng = ChaCha8Rng::seed_from_u64(16382);
    let mut solved = 0;
    for test in 0..200 {
        // every entry can be doubled, the duals however may not fit an i16
        let data = (0..36).map(|_| rng.gen_range(0..=16_382i16)).collect::<Vec<_>>();
        let mut matrix = CostMatrix::new(6, data.clone()).unwrap();
        let wide = CostMatrix::new(6, data.iter().map(|&c| i64::from(c)).collect()).unwrap();
        let (_, bf_cost) = brute_force_assignment(&wide).unwrap();

        match Hungarian::new(&mut matrix).verify_optimum(true).solve() {
            Ok(matching) => {
                solved += 1;
                assert!(matching.is_perfect(), "test {test}");
                assert_eq!(Ok(bf_cost), matching.cost(&wide), "test {test}");
            }
            Err(AssignmentError::DualOverflow { stage, vertex }) => {
                assert!((1..=6).contains(&stage), "test {test}");
                assert!(vertex < 12, "test {test}");
            }
            Err(e) => panic!("test {test}: unexpected error {e}"),
        }
        assert_eq!(data.as_slice(), matrix.as_slice(), "test {test}: the costs were not restored");

        // the same instance fits a wider type and is always solved
        let mut wide = wide;
        let matching = Hungarian::new(&mut wide).verify_optimum(true).solve().unwrap();
        assert_eq!(Ok(bf_cost), matching.cost(&wide), "test {test}");
    }
    log::debug!("{solved} out of 200 near limit instances fit an i16");
}
