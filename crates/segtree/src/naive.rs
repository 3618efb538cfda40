use crate::{Error, SegmentTree, check_index, check_range, ops::Operation};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{fmt, mem};

/// Naive impl of [SegmentTree] that stores values as-is and folds them one by one.
///
/// Reads and writes take `O(1)` time and a fold over `k` positions takes `O(k)` time.
/// Folds always run left to right, so any associative operation is supported.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NaiveSegmentTree<A, O> {
    buf: Vec<A>,
    op: O,
}

impl<A: Clone, O: Operation<A>> SegmentTree<A> for NaiveSegmentTree<A, O> {
    type Op = O;

    fn build(values: Vec<A>, op: O) -> Result<Self, Error> {
        if values.is_empty() {
            log::trace!("rejected empty segment tree");
            return Err(Error::Empty);
        }
        Ok(Self { buf: values, op })
    }
    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }
    #[inline]
    fn op(&self) -> &O {
        &self.op
    }
    #[inline]
    fn values(&self) -> &[A] {
        &self.buf
    }
    #[inline]
    fn get(&self, index: usize) -> Result<&A, Error> {
        check_index(index, self.buf.len())?;
        Ok(&self.buf[index])
    }
    #[inline]
    fn set(&mut self, index: usize, value: A) -> Result<A, Error> {
        check_index(index, self.buf.len())?;
        Ok(mem::replace(&mut self.buf[index], value))
    }
    fn fold(&self, identity: A, from: usize, to: usize) -> Result<A, Error> {
        check_range(from, to, self.buf.len())?;
        Ok(self.buf[from..=to].iter().fold(identity, |mut acc, value| {
            self.op.combine_mut(&mut acc, value);
            acc
        }))
    }
    fn max_right<P>(&self, identity: A, from: usize, pred: P) -> Result<(usize, A), Error>
    where
        P: Fn(&A) -> bool,
    {
        let n = self.buf.len();
        if from > n {
            return Err(Error::IndexOutOfBounds { index: from, len: n });
        }
        if !pred(&identity) {
            return Err(Error::PredicateRejectsIdentity);
        }
        let mut acc = identity;
        for (i, value) in self.buf.iter().enumerate().skip(from) {
            let tmp = self.op.combine(&acc, value);
            if !pred(&tmp) {
                return Ok((i, acc));
            }
            acc = tmp;
        }
        Ok((n, acc))
    }
}

impl<A, O> NaiveSegmentTree<A, O> {
    /// Consumes the tree and returns its values
    pub fn into_vec(self) -> Vec<A> {
        self.buf
    }
}

impl<A: fmt::Debug, O> fmt::Debug for NaiveSegmentTree<A, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NaiveSegmentTree({:?})", self.buf)
    }
}
