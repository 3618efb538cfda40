//! segtree provides array-backed segment trees supporting point updates and range folds
//!
//! Two implementations share the [SegmentTree] contract:
//!
//! - [EfficientSegmentTree] stores `2n` values and answers folds in `O(log n)`.
//! - [NaiveSegmentTree] stores the `n` values as-is and folds in linear time. It serves as
//!   a reference when testing the efficient tree.
//!
//! Both are built once from a sequence and an [Operation](ops::Operation) and never change size.
//!
//! # Example
//!
//! ```
//! use segtree::{ops::Add, EfficientSegmentTree, SegmentTree};
//!
//! let mut tree = EfficientSegmentTree::build(vec![1i32, 3, 5, 7], Add).unwrap();
//! assert_eq!(tree.fold(0, 0, 3), Ok(16));
//!
//! tree.set(1, 10).unwrap();
//! assert_eq!(tree.fold(0, 0, 3), Ok(23));
//! assert_eq!(tree.fold(0, 1, 2), Ok(15));
//! assert_eq!(tree.get(1), Ok(&10));
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(nonstandard_style, missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{
    fmt,
    fmt::Display,
    ops::{Bound, Range, RangeBounds},
};

/// The efficient bottom-up segment tree
pub mod efficient;
/// The linear-time reference tree
pub mod naive;
pub mod ops;

/// Latency statistics recorded with the `profiler` feature
#[cfg(feature = "profiler")]
pub mod stats;

pub use efficient::EfficientSegmentTree;
pub use naive::NaiveSegmentTree;
pub use ops::Operation;

/// A type containing error variants that may arise when using a segment tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Attempted to build a tree from zero values
    Empty,
    /// The index does not refer to a position of the tree
    IndexOutOfBounds {
        /// The rejected index
        index: usize,
        /// Number of positions in the tree
        len: usize,
    },
    /// The range is reversed or does not fit within the tree
    InvalidRange {
        /// First position of the range
        from: usize,
        /// Last position of the range
        to: usize,
        /// Number of positions in the tree
        len: usize,
    },
    /// The search predicate does not hold for the identity
    PredicateRejectsIdentity,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "cannot build a segment tree from zero values"),
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for segment tree of length {len}")
            }
            Error::InvalidRange { from, to, len } => {
                write!(f, "invalid range [{from}, {to}] for segment tree of length {len}")
            }
            Error::PredicateRejectsIdentity => {
                write!(f, "search predicate must hold for the identity")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Returns `true` if the error represents [Error::IndexOutOfBounds]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds { .. })
    }
    /// Returns `true` if the error represents [Error::InvalidRange]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. })
    }
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if index < len {
        Ok(())
    } else {
        log::trace!("rejected index {index} for length {len}");
        Err(Error::IndexOutOfBounds { index, len })
    }
}

#[inline]
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<(), Error> {
    check_index(to, len)?;
    if from > to {
        log::trace!("rejected reversed range [{from}, {to}]");
        return Err(Error::InvalidRange { from, to, len });
    }
    Ok(())
}

// NOTE: move to slice::range function once it is stable
#[inline]
fn into_range(range: &impl RangeBounds<usize>, len: usize) -> Result<Range<usize>, Error> {
    let start = match range.start_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => n.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(&n) => n.checked_add(1),
        Bound::Excluded(&n) => Some(n),
        Bound::Unbounded => Some(len),
    };
    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
        (start, end) => {
            let from = start.unwrap_or(usize::MAX);
            let to = end.map_or(usize::MAX, |end| end.saturating_sub(1));
            log::trace!("rejected range [{from}, {to}] for length {len}");
            Err(Error::InvalidRange { from, to, len })
        }
    }
}

/// An indexable, updatable and foldable sequence of fixed length
///
/// Folds run over the inclusive range `[from, to]` and are seeded with an identity value,
/// computing `combine(...combine(combine(identity, a[from]), a[from + 1])..., a[to])`.
pub trait SegmentTree<A> {
    /// The combining operation of the tree
    type Op: Operation<A>;

    /// Builds a tree over `values` combined with `op`
    ///
    /// Returns [Error::Empty] if `values` is empty.
    fn build(values: Vec<A>, op: Self::Op) -> Result<Self, Error>
    where
        Self: Sized;

    /// Number of positions in the tree
    fn len(&self) -> usize;

    /// Always `false` as empty trees cannot be built
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the combining operation
    fn op(&self) -> &Self::Op;

    /// The current values of the tree in positional order
    fn values(&self) -> &[A];

    /// Returns the value at `index`
    fn get(&self, index: usize) -> Result<&A, Error>;

    /// Replaces the value at `index` and returns the previous value
    fn set(&mut self, index: usize, value: A) -> Result<A, Error>;

    /// Folds the inclusive range `[from, to]` starting from `identity`
    fn fold(&self, identity: A, from: usize, to: usize) -> Result<A, Error>;

    /// Returns the largest `r` such that `pred` holds for the fold of `[from, r)`
    ///
    /// `pred` must be monotone: once it fails for a prefix it fails for every longer one.
    /// The fold value of `[from, r)` is returned alongside `r`.
    fn max_right<P>(&self, identity: A, from: usize, pred: P) -> Result<(usize, A), Error>
    where
        P: Fn(&A) -> bool;

    /// Replaces the value at `index` with `combine(value, delta)`
    fn compose(&mut self, index: usize, delta: &A) -> Result<(), Error> {
        let value = self.op().combine(self.get(index)?, delta);
        self.set(index, value).map(drop)
    }

    /// Replaces the value at `index` with `combine(delta, value)`
    fn compose_left(&mut self, index: usize, delta: &A) -> Result<(), Error> {
        let value = self.op().combine(delta, self.get(index)?);
        self.set(index, value).map(drop)
    }

    /// Folds any range of positions starting from `identity`
    ///
    /// An empty range returns `identity`.
    fn fold_range<R>(&self, identity: A, range: R) -> Result<A, Error>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = into_range(&range, self.len())?;
        if start == end {
            return Ok(identity);
        }
        self.fold(identity, start, end - 1)
    }
}
