use std::iter::FromIterator;

use thiserror::Error;

use crate::groups::{Monoid, NumAdditiveMonoid};

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SegmentTreeError {
    #[error("Index {index} is out of bounds for a segment tree of length {len}")]
    InvalidIndex { index: usize, len: usize },
    #[error("Range [{left}, {right}] is invalid for a segment tree of length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, SegmentTreeError>;

/// Segment tree over an arbitrary monoid.
///
/// Nodes live in a flat vector using the 1-based heap layout: node `v` covers some
/// range `[l, r]` and its children `2v` and `2v + 1` cover `[l, mid]` and
/// `[mid + 1, r]`, with `mid = (l + r) / 2`. Node `1` covers `[0, len - 1]`.
/// The vector holds `4 * len` slots, which is enough for any `len`.
///
/// Every internal node stores the `combine` of its two children, so ranges are
/// aggregated in index order and the monoid doesn't need to be commutative.
#[derive(Clone, Debug)]
pub struct SegmentTree<M: Monoid> {
    monoid: M,
    len: usize,
    data: Vec<M::Elem>,
}

/// A segment tree using the default reducer, addition.
pub type SumSegmentTree<T> = SegmentTree<NumAdditiveMonoid<T>>;

impl<M: Monoid> SegmentTree<M> {
    /// Creates a tree of `length` leaves, all set to the identity.
    ///
    /// # Panics
    /// If `4 * length` overflows `usize`.
    ///
    /// O(n)
    #[inline]
    pub fn new(monoid: M, length: usize) -> Self {
        let size = length
            .checked_mul(4)
            .expect("segment tree length exceeds usize::MAX / 4");
        let mut data = Vec::new();
        data.resize_with(size, || monoid.id());
        log::trace!("new segment tree with {} identity leaves", length);
        Self {
            monoid,
            len: length,
            data,
        }
    }

    /// Creates a tree whose leaves are `values`, in order.
    ///
    /// O(n)
    pub fn from_values<Iter: IntoIterator<Item = M::Elem>>(monoid: M, values: Iter) -> Self {
        let values: Vec<_> = values.into_iter().collect();
        let mut tree = Self::new(monoid, values.len());
        tree.build(values);
        tree
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    /// Overwrites the leaves with `values` and recomputes every internal node.
    ///
    /// The length of the tree doesn't change: values past `len` are dropped and
    /// leaves without a value are reset to the identity.
    ///
    /// O(n)
    pub fn build<Iter: IntoIterator<Item = M::Elem>>(&mut self, values: Iter) {
        log::trace!("building segment tree of length {}", self.len);
        if self.len != 0 {
            self.build_node(&mut values.into_iter(), 1, 0, self.len - 1);
        }
    }

    // The recursion reaches the leaves left to right, so they can be fed
    // straight from the iterator.
    fn build_node<Iter: Iterator<Item = M::Elem>>(
        &mut self,
        values: &mut Iter,
        v: usize,
        l: usize,
        r: usize,
    ) {
        if l == r {
            let x = match values.next() {
                Some(x) => x,
                None => self.monoid.id(),
            };
            self.data[v] = x;
        } else {
            let mid = (l + r) / 2;
            self.build_node(values, 2 * v, l, mid);
            self.build_node(values, 2 * v + 1, mid + 1, r);
            self.pull(v);
        }
    }

    #[inline]
    fn pull(&mut self, v: usize) {
        self.data[v] = self
            .monoid
            .combine(self.data[2 * v].clone(), self.data[2 * v + 1].clone());
    }

    /// Sets the leaf at `index` to `x`. Does nothing if `index >= len`.
    ///
    /// O(log n)
    pub fn update_point(&mut self, index: usize, x: M::Elem) {
        if index < self.len {
            self.update_node(index, x, 1, 0, self.len - 1);
        } else {
            log::debug!(
                "ignoring update at index {} of segment tree of length {}",
                index,
                self.len
            );
        }
    }

    /// Like `update_point`, but reports an out of bounds `index`.
    ///
    /// O(log n)
    pub fn try_update_point(&mut self, index: usize, x: M::Elem) -> Result<()> {
        if index < self.len {
            self.update_node(index, x, 1, 0, self.len - 1);
            Ok(())
        } else {
            Err(SegmentTreeError::InvalidIndex {
                index,
                len: self.len,
            })
        }
    }

    fn update_node(&mut self, index: usize, x: M::Elem, v: usize, l: usize, r: usize) {
        if l == r {
            self.data[v] = x;
        } else {
            let mid = (l + r) / 2;
            if index <= mid {
                self.update_node(index, x, 2 * v, l, mid);
            } else {
                self.update_node(index, x, 2 * v + 1, mid + 1, r);
            }
            self.pull(v);
        }
    }

    /// Combines the leaves of the closed range `[left, right]`, in order.
    ///
    /// Returns the identity when the range is empty or out of bounds, which can't
    /// be told apart from a range that happens to aggregate to the identity. Use
    /// `try_get` to tell them apart.
    ///
    /// O(log n)
    pub fn get(&self, left: usize, right: usize) -> M::Elem {
        match self.try_get(left, right) {
            Ok(x) => x,
            Err(err) => {
                log::debug!("{}; returning the identity", err);
                self.monoid.id()
            }
        }
    }

    /// O(log n)
    pub fn try_get(&self, left: usize, right: usize) -> Result<M::Elem> {
        if left <= right && right < self.len {
            Ok(self.query(left, right, 1, 0, self.len - 1))
        } else {
            Err(SegmentTreeError::InvalidRange {
                left,
                right,
                len: self.len,
            })
        }
    }

    fn query(&self, left: usize, right: usize, v: usize, l: usize, r: usize) -> M::Elem {
        if left <= l && r <= right {
            return self.data[v].clone();
        }

        let mid = (l + r) / 2;
        if right <= mid {
            self.query(left, right, 2 * v, l, mid)
        } else if left > mid {
            self.query(left, right, 2 * v + 1, mid + 1, r)
        } else {
            self.monoid.combine(
                self.query(left, right, 2 * v, l, mid),
                self.query(left, right, 2 * v + 1, mid + 1, r),
            )
        }
    }

    /// Aggregate of the whole tree.
    ///
    /// O(1)
    pub fn total(&self) -> M::Elem {
        if self.is_empty() {
            self.monoid.id()
        } else {
            self.data[1].clone()
        }
    }

    /// O(log n)
    pub fn leaf(&self, index: usize) -> Option<&M::Elem> {
        if index >= self.len {
            return None;
        }

        let (mut v, mut l, mut r) = (1, 0, self.len - 1);
        while l != r {
            let mid = (l + r) / 2;
            if index <= mid {
                v = 2 * v;
                r = mid;
            } else {
                v = 2 * v + 1;
                l = mid + 1;
            }
        }
        Some(&self.data[v])
    }

    /// The leaves, in index order.
    ///
    /// O(n)
    pub fn to_vec(&self) -> Vec<M::Elem> {
        let mut leaves = Vec::with_capacity(self.len);
        if self.len != 0 {
            self.collect_leaves(&mut leaves, 1, 0, self.len - 1);
        }
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<M::Elem>, v: usize, l: usize, r: usize) {
        if l == r {
            leaves.push(self.data[v].clone());
        } else {
            let mid = (l + r) / 2;
            self.collect_leaves(leaves, 2 * v, l, mid);
            self.collect_leaves(leaves, 2 * v + 1, mid + 1, r);
        }
    }
}

impl<M: Monoid + Default> SegmentTree<M> {
    #[inline]
    pub fn with_len(length: usize) -> Self {
        Self::new(M::default(), length)
    }
}

impl<M: Monoid + Default> Default for SegmentTree<M> {
    fn default() -> Self {
        Self::with_len(0)
    }
}

impl<M: Monoid + Default> FromIterator<M::Elem> for SegmentTree<M> {
    fn from_iter<Iter: IntoIterator<Item = M::Elem>>(iter: Iter) -> Self {
        Self::from_values(M::default(), iter)
    }
}

impl<M: Monoid + Default> From<Vec<M::Elem>> for SegmentTree<M> {
    fn from(values: Vec<M::Elem>) -> Self {
        Self::from_values(M::default(), values)
    }
}
