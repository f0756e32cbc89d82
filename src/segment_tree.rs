use std::convert::TryFrom;

use crate::error::Error;
use crate::groups::{Identity, Magma, MinMonoid, NumAdditiveGroups};

/// Range-add / range-min segment tree with lazy propagation.
///
/// Nodes live in two parallel arrays addressed like a binary heap: the
/// children of node `i` are `2i + 1` and `2i + 2`. `tree[i]` is the minimum of
/// the range node `i` covers once every ancestor's pending delta has been
/// applied, and `lazy[i]` is a delta owed to the whole range of `i` that has
/// not yet been pushed to its children.
#[derive(Clone, Debug)]
pub struct SegmentTree<T: num::PrimInt + num::Signed> {
    add: NumAdditiveGroups<T>,
    min: MinMonoid<T>,
    tree: Vec<T>,
    lazy: Vec<T>,
    len: usize,
}

impl<T: num::PrimInt + num::Signed> SegmentTree<T> {
    /// O(n)
    pub fn new(values: &[T]) -> Result<Self, Error> {
        if values.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("rejected empty input");
            return Err(Error::EmptyInput);
        }

        let len = values.len();
        // Midpoint splits of [0, len - 1] never address past this bound.
        let nodes = 2 * len.next_power_of_two() - 1;
        let add = NumAdditiveGroups::<T>::new();

        let mut st = Self {
            add,
            min: MinMonoid::new(),
            tree: vec![add.id(); nodes],
            lazy: vec![add.id(); nodes],
            len,
        };
        st.build(0, 0, len - 1, values);

        #[cfg(feature = "tracing")]
        tracing::debug!(len, nodes, "built segment tree");

        Ok(st)
    }

    /// Length of the slice the tree was built from.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Minimum over `[l, r]` of the current values.
    ///
    /// O(log n)
    pub fn range_min_query(&mut self, l: isize, r: isize) -> Result<T, Error> {
        let (ql, qr) = self.check_range(l, r)?;
        let last = self.len - 1;
        match self.query(0, (ql, qr), 0, last) {
            Some(min) => Ok(min),
            // A validated [ql, qr] is non-empty and inside the root's range.
            None => unreachable!("validated range {}..={} missed the root", ql, qr),
        }
    }

    /// Adds `delta` to every value in `[l, r]`.
    ///
    /// O(log n)
    pub fn range_add(&mut self, l: isize, r: isize, delta: T) -> Result<(), Error> {
        let (ql, qr) = self.check_range(l, r)?;
        if self.add.is_id(&delta) {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(l, r, delta = ?num::ToPrimitive::to_i64(&delta), "range add");

        let last = self.len - 1;
        self.update(0, (ql, qr), 0, last, delta);
        Ok(())
    }

    fn check_range(&self, l: isize, r: isize) -> Result<(usize, usize), Error> {
        match (usize::try_from(l), usize::try_from(r)) {
            (Ok(ql), Ok(qr)) if ql <= qr && qr < self.len => Ok((ql, qr)),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(l, r, len = self.len, "rejected invalid range");
                Err(Error::InvalidRange { l, r })
            }
        }
    }

    fn build(&mut self, node: usize, l: usize, r: usize, values: &[T]) {
        if l >= r {
            self.tree[node] = values[l];
            return;
        }
        let mid = l + (r - l) / 2;
        self.build(2 * node + 1, l, mid, values);
        self.build(2 * node + 2, mid + 1, r, values);
        self.pull(node);
    }

    fn query(&mut self, node: usize, q: (usize, usize), l: usize, r: usize) -> Option<T> {
        self.flush(node, l, r);

        let (ql, qr) = q;
        if qr < l || r < ql {
            return self.min.id();
        }
        if ql <= l && r <= qr {
            return Some(self.tree[node]);
        }

        let mid = l + (r - l) / 2;
        let left = self.query(2 * node + 1, q, l, mid);
        let right = self.query(2 * node + 2, q, mid + 1, r);
        self.min.add(left, right)
    }

    fn update(&mut self, node: usize, q: (usize, usize), l: usize, r: usize, delta: T) {
        self.flush(node, l, r);

        let (ql, qr) = q;
        if qr < l || r < ql {
            return;
        }
        if ql <= l && r <= qr {
            self.tree[node] = self.add.add(self.tree[node], delta);
            if l < r {
                self.defer(node, delta);
            }
            return;
        }

        let mid = l + (r - l) / 2;
        self.update(2 * node + 1, q, l, mid, delta);
        self.update(2 * node + 2, q, mid + 1, r, delta);
        self.pull(node);
    }

    /// Applies the pending delta of `node` to its own minimum and hands it
    /// down to its children. Must run before `tree[node]` is read.
    #[inline]
    fn flush(&mut self, node: usize, l: usize, r: usize) {
        let pending = self.lazy[node];
        if self.add.is_id(&pending) {
            return;
        }
        self.tree[node] = self.add.add(self.tree[node], pending);
        if l < r {
            self.defer(node, pending);
        }
        self.lazy[node] = self.add.id();
    }

    #[inline]
    fn defer(&mut self, node: usize, delta: T) {
        let left = 2 * node + 1;
        let right = left + 1;
        self.lazy[left] = self.add.add(self.lazy[left], delta);
        self.lazy[right] = self.add.add(self.lazy[right], delta);
    }

    #[inline]
    fn pull(&mut self, node: usize) {
        let left = 2 * node + 1;
        let right = left + 1;
        self.tree[node] = self.tree[left].min(self.tree[right]);
    }
}

impl<T: num::PrimInt + num::Signed> TryFrom<&[T]> for SegmentTree<T> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self, Error> {
        Self::new(values)
    }
}

impl<T: num::PrimInt + num::Signed> TryFrom<Vec<T>> for SegmentTree<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self, Error> {
        Self::new(&values)
    }
}
