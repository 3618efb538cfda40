#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use segtree::{EfficientSegmentTree, NaiveSegmentTree, SegmentTree, ops::Add};

#[derive(Debug, Arbitrary)]
enum Op {
    Set(usize, u32),
    Fold(usize, usize),
    MaxRight(usize, u32),
}

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u32>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let values: Vec<u64> = input.values.into_iter().map(u64::from).collect();
    let (mut efficient, mut naive) = match (
        EfficientSegmentTree::build(values.clone(), Add),
        NaiveSegmentTree::build(values, Add),
    ) {
        (Ok(efficient), Ok(naive)) => (efficient, naive),
        (efficient, naive) => {
            assert_eq!(efficient.err(), naive.err());
            return;
        }
    };

    for op in input.ops {
        match op {
            Op::Set(idx, value) => {
                let value = u64::from(value);
                assert_eq!(efficient.set(idx, value), naive.set(idx, value));
            }
            Op::Fold(from, to) => {
                let expected = naive.fold(0, from, to);
                assert_eq!(efficient.fold(0, from, to), expected);
                assert_eq!(efficient.fold_commutative(0, from, to), expected);
            }
            Op::MaxRight(from, limit) => {
                let limit = u64::from(limit);
                assert_eq!(
                    efficient.max_right(0, from, |&x| x <= limit),
                    naive.max_right(0, from, |&x| x <= limit)
                );
            }
        }
    }
});
