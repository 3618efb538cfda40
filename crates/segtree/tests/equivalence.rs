use proptest::{prelude::*, sample::Index};
use segtree::{
    EfficientSegmentTree, NaiveSegmentTree, SegmentTree,
    ops::{Add, Identity, Max, Min, Xor},
};

fn concat(a: &String, b: &String) -> String {
    format!("{a}{b}")
}

type Matrix = [[u64; 2]; 2];

// 2x2 matrix product modulo a prime: associative but not commutative
fn mat_mul(a: &Matrix, b: &Matrix) -> Matrix {
    const P: u64 = 1_000_000_007;
    let mut out = [[0; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = (a[i][0] * b[0][j] + a[i][1] * b[1][j]) % P;
        }
    }
    out
}

const MAT_ID: Matrix = [[1, 0], [0, 1]];

fn sorted(a: &Index, b: &Index, len: usize) -> (usize, usize) {
    let (x, y) = (a.index(len), b.index(len));
    (x.min(y), x.max(y))
}

proptest! {
    #[test]
    fn sum_fold_matches_naive(
        values in prop::collection::vec(-1_000i64..1_000, 1..80),
        updates in prop::collection::vec((any::<Index>(), -1_000i64..1_000), 0..40),
        ranges in prop::collection::vec((any::<Index>(), any::<Index>()), 1..20),
    ) {
        let mut efficient = EfficientSegmentTree::build(values.clone(), Add).unwrap();
        let mut naive = NaiveSegmentTree::build(values, Add).unwrap();
        let n = naive.len();

        for (idx, value) in updates {
            let idx = idx.index(n);
            prop_assert_eq!(efficient.set(idx, value), naive.set(idx, value));
            prop_assert_eq!(efficient.get(idx), Ok(&value));
        }
        prop_assert_eq!(efficient.values(), naive.values());

        for (a, b) in ranges {
            let (from, to) = sorted(&a, &b, n);
            let expected = naive.fold(0, from, to);
            prop_assert_eq!(efficient.fold(0, from, to), expected);
            prop_assert_eq!(efficient.fold_commutative(0, from, to), expected);
        }
    }

    #[test]
    fn min_max_fold_matches_naive(
        values in prop::collection::vec(any::<i32>(), 1..80),
        ranges in prop::collection::vec((any::<Index>(), any::<Index>()), 1..20),
    ) {
        let min = EfficientSegmentTree::build(values.clone(), Min).unwrap();
        let max = EfficientSegmentTree::build(values.clone(), Max).unwrap();
        let naive_min = NaiveSegmentTree::build(values.clone(), Min).unwrap();
        let naive_max = NaiveSegmentTree::build(values, Max).unwrap();
        let n = min.len();

        for (a, b) in ranges {
            let (from, to) = sorted(&a, &b, n);
            prop_assert_eq!(min.fold(i32::MAX, from, to), naive_min.fold(i32::MAX, from, to));
            prop_assert_eq!(max.fold_commutative(i32::MIN, from, to), naive_max.fold(i32::MIN, from, to));
        }
    }

    #[test]
    fn ordered_fold_supports_concatenation(
        values in prop::collection::vec("[a-z]{0,3}", 1..40),
        updates in prop::collection::vec((any::<Index>(), "[A-Z]{1,2}"), 0..20),
        ranges in prop::collection::vec((any::<Index>(), any::<Index>()), 1..20),
    ) {
        let mut efficient = EfficientSegmentTree::build(values.clone(), concat).unwrap();
        let mut naive = NaiveSegmentTree::build(values, concat).unwrap();
        let n = naive.len();

        for (idx, value) in updates {
            let idx = idx.index(n);
            efficient.set(idx, value.clone()).unwrap();
            naive.set(idx, value).unwrap();
        }
        for (a, b) in ranges {
            let (from, to) = sorted(&a, &b, n);
            prop_assert_eq!(
                efficient.fold(String::from("^"), from, to),
                naive.fold(String::from("^"), from, to)
            );
        }
    }

    #[test]
    fn ordered_fold_supports_matrix_product(
        values in prop::collection::vec(any::<[[u8; 2]; 2]>(), 1..50),
        ranges in prop::collection::vec((any::<Index>(), any::<Index>()), 1..20),
    ) {
        let values: Vec<Matrix> = values
            .into_iter()
            .map(|m| m.map(|row| row.map(u64::from)))
            .collect();
        let efficient = EfficientSegmentTree::build(values.clone(), mat_mul).unwrap();
        let naive = NaiveSegmentTree::build(values, mat_mul).unwrap();
        let n = naive.len();

        for (a, b) in ranges {
            let (from, to) = sorted(&a, &b, n);
            prop_assert_eq!(efficient.fold(MAT_ID, from, to), naive.fold(MAT_ID, from, to));
        }
    }

    #[test]
    fn max_right_matches_naive(
        values in prop::collection::vec(0u32..100, 1..80),
        from in any::<Index>(),
        limit in 0u32..2_000,
    ) {
        let efficient = EfficientSegmentTree::build(values.clone(), Add).unwrap();
        let naive = NaiveSegmentTree::build(values, Add).unwrap();
        let from = from.index(naive.len() + 1);

        prop_assert_eq!(
            efficient.max_right(0, from, |&x| x <= limit),
            naive.max_right(0, from, |&x| x <= limit)
        );
    }
}

#[test]
fn random_stream_matches_naive() {
    let mut rng = fastrand::Rng::with_seed(42);

    for n in [1usize, 2, 3, 7, 16, 31, 100, 257] {
        let values: Vec<u64> = (0..n).map(|_| rng.u64(..)).collect();
        let mut efficient = EfficientSegmentTree::build(values.clone(), Xor).unwrap();
        let mut naive = NaiveSegmentTree::build(values, Xor).unwrap();
        let identity = Identity::<u64>::identity(&Xor);

        for _ in 0..1_000 {
            if rng.bool() {
                let idx = rng.usize(0..n);
                let value = rng.u64(..);
                assert_eq!(efficient.set(idx, value), naive.set(idx, value));
            } else {
                let from = rng.usize(0..n);
                let to = rng.usize(from..n);
                let expected = naive.fold(identity, from, to);
                assert_eq!(efficient.fold(identity, from, to), expected);
                assert_eq!(efficient.fold_commutative(identity, from, to), expected);
            }
        }
    }
}

#[test]
fn single_position_folds_for_every_size() {
    for n in 1..=64usize {
        let values: Vec<i64> = (0..n as i64).map(|i| i * i - 30).collect();
        let tree = EfficientSegmentTree::build(values, Add).unwrap();
        for k in 0..n {
            let value = *tree.get(k).unwrap();
            assert_eq!(tree.fold(5, k, k), Ok(5 + value));
            assert_eq!(tree.fold_commutative(5, k, k), Ok(5 + value));
        }
    }
}

#[test]
fn full_range_fold_equals_sum_of_inputs() {
    let values: Vec<u32> = (1..=1_000).collect();
    let tree = EfficientSegmentTree::build(values.clone(), Add).unwrap();
    assert_eq!(tree.fold(0, 0, 999), Ok(values.iter().sum()));
    assert_eq!(tree.fold_range(0, ..), Ok(500_500));
}

#[test]
fn min_with_infinity_identity() {
    let mut efficient = EfficientSegmentTree::build(vec![5.0f64, 2.0, 8.0, 1.0, 9.0], Min).unwrap();
    let mut naive = NaiveSegmentTree::build(vec![5.0f64, 2.0, 8.0, 1.0, 9.0], Min).unwrap();

    assert_eq!(efficient.fold(f64::INFINITY, 0, 4), Ok(1.0));
    efficient.set(3, 100.0).unwrap();
    naive.set(3, 100.0).unwrap();
    assert_eq!(efficient.fold(f64::INFINITY, 0, 4), Ok(2.0));
    assert_eq!(efficient.fold(f64::INFINITY, 3, 4), Ok(9.0));
    assert_eq!(
        efficient.fold(f64::INFINITY, 0, 4),
        naive.fold(f64::INFINITY, 0, 4)
    );
}
