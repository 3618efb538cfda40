use crate::{Error, SegmentTree, check_index, check_range, ops::Commutative, ops::Operation};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem,
};

#[cfg(feature = "profiler")]
use crate::stats::Stats;
#[cfg(feature = "profiler")]
use segtree_stats::profile_scope;

/// A segment tree allowing range folds and single element modification.
///
/// The tree allocates `2n` values. Leaf `i` lives at `buf[n + i]` and every internal node
/// `i` in `[1, n)` holds `combine(buf[2i], buf[2i + 1])`. Slot `0` is never read.
///
/// Folds through [SegmentTree::fold] preserve positional order and work for any
/// associative operation, while [EfficientSegmentTree::fold_commutative] keeps a single
/// accumulator and requires a [Commutative] operation.
#[derive(Clone)]
pub struct EfficientSegmentTree<A, O> {
    buf: Vec<A>,
    n: usize,
    op: O,
    #[cfg(feature = "profiler")]
    stats: Stats,
}

impl<A: Clone, O: Operation<A>> SegmentTree<A> for EfficientSegmentTree<A, O> {
    type Op = O;

    /// Builds the tree bottom-up using `n - 1` combines.
    fn build(values: Vec<A>, op: O) -> Result<Self, Error> {
        #[cfg(feature = "profiler")]
        let stats = Stats::default();
        #[cfg(feature = "profiler")]
        profile_scope!(&stats.build);

        let n = values.len();
        if n == 0 {
            log::trace!("rejected empty segment tree");
            return Err(Error::Empty);
        }

        // the first half only reserves room for internal nodes
        let mut buf = Vec::with_capacity(n << 1);
        buf.extend_from_slice(&values);
        buf.extend(values);
        for i in (1..n).rev() {
            buf[i] = op.combine(&buf[i << 1], &buf[i << 1 | 1]);
        }
        log::debug!("built segment tree with {n} leaves");

        Ok(Self {
            buf,
            n,
            op,
            #[cfg(feature = "profiler")]
            stats,
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.n
    }

    #[inline]
    fn op(&self) -> &O {
        &self.op
    }

    #[inline]
    fn values(&self) -> &[A] {
        &self.buf[self.n..]
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&A, Error> {
        check_index(index, self.n)?;
        Ok(&self.buf[index + self.n])
    }

    /// Writes the leaf and recomputes each of its ancestors once. Uses `O(log n)` time.
    fn set(&mut self, index: usize, value: A) -> Result<A, Error> {
        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.set);

        check_index(index, self.n)?;
        let mut p = index + self.n;
        let old = mem::replace(&mut self.buf[p], value);
        while p > 1 {
            p >>= 1;
            self.buf[p] = self.op.combine(&self.buf[p << 1], &self.buf[p << 1 | 1]);
        }
        Ok(old)
    }

    /// Uses `O(log n)` time.
    ///
    /// Left boundary nodes are folded into an accumulator seeded with `identity` and right
    /// boundary nodes into a separate accumulator, which are combined at the end.
    fn fold(&self, identity: A, from: usize, to: usize) -> Result<A, Error> {
        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.fold);

        check_range(from, to, self.n)?;
        let mut left = identity;
        let mut right: Option<A> = None;
        let (mut l, mut r) = (from + self.n, to + self.n + 1);
        while l < r {
            if l & 1 == 1 {
                self.op.combine_mut(&mut left, &self.buf[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                if let Some(acc) = right.as_mut() {
                    self.op.combine_mut2(&self.buf[r], acc);
                } else {
                    right = Some(self.buf[r].clone());
                }
            }
            l >>= 1;
            r >>= 1;
        }
        Ok(match right {
            Some(right) => self.op.combine(&left, &right),
            None => left,
        })
    }

    /// Descends from the leftmost failing canonical root. Uses `O(log n)` time.
    fn max_right<P>(&self, identity: A, from: usize, pred: P) -> Result<(usize, A), Error>
    where
        P: Fn(&A) -> bool,
    {
        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.max_right);

        if from > self.n {
            return Err(Error::IndexOutOfBounds {
                index: from,
                len: self.n,
            });
        }
        if !pred(&identity) {
            return Err(Error::PredicateRejectsIdentity);
        }

        let mut acc = identity;
        for root in self.roots(from, self.n) {
            let tmp = self.op.combine(&acc, &self.buf[root]);
            if pred(&tmp) {
                acc = tmp;
                continue;
            }
            let mut v = root;
            while v < self.n {
                v <<= 1;
                let tmp = self.op.combine(&acc, &self.buf[v]);
                if pred(&tmp) {
                    acc = tmp;
                    v += 1;
                }
            }
            return Ok((v - self.n, acc));
        }
        Ok((self.n, acc))
    }
}

impl<A: Clone, O: Commutative<A>> EfficientSegmentTree<A, O> {
    /// Folds `[from, to]` into a single accumulator seeded with `identity`.
    ///
    /// Boundary nodes are combined in the order the walk reaches them rather than in
    /// positional order, so the result only equals [SegmentTree::fold] for commutative
    /// operations. Uses `O(log n)` time.
    pub fn fold_commutative(&self, identity: A, from: usize, to: usize) -> Result<A, Error> {
        #[cfg(feature = "profiler")]
        profile_scope!(&self.stats.fold_commutative);

        check_range(from, to, self.n)?;
        let mut result = identity;
        let (mut l, mut r) = (from + self.n, to + self.n);
        while l <= r {
            if l & 1 == 1 {
                self.op.combine_mut(&mut result, &self.buf[l]);
                l += 1;
            }
            if r & 1 == 0 {
                self.op.combine_mut2(&self.buf[r], &mut result);
                r -= 1;
            }
            l >>= 1;
            r >>= 1;
        }
        Ok(result)
    }
}

impl<A, O> EfficientSegmentTree<A, O> {
    /// Canonical roots covering `[start, end)` in positional order
    fn roots(&self, start: usize, end: usize) -> impl DoubleEndedIterator<Item = usize> {
        let (mut l, mut r) = (start + self.n, end + self.n);
        let (mut left, mut right) = (Vec::new(), Vec::new());
        while l < r {
            if l & 1 == 1 {
                left.push(l);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                right.push(r);
            }
            l >>= 1;
            r >>= 1;
        }
        left.into_iter().chain(right.into_iter().rev())
    }

    /// Consumes the tree and returns its values in positional order
    pub fn into_vec(mut self) -> Vec<A> {
        self.buf.split_off(self.n)
    }

    /// Returns latency statistics of the tree
    #[cfg(feature = "profiler")]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl<A: fmt::Debug, O> fmt::Debug for EfficientSegmentTree<A, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EfficientSegmentTree({:?})", &self.buf[self.n..])
    }
}
impl<A: PartialEq, O: PartialEq> PartialEq for EfficientSegmentTree<A, O> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.buf[self.n..] == other.buf[other.n..]
    }
}
impl<A: Eq, O: Eq> Eq for EfficientSegmentTree<A, O> {}
impl<A: Hash, O> Hash for EfficientSegmentTree<A, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf[self.n..].hash(state);
    }
}
