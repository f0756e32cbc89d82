pub trait Magma {
    type Elem: Clone;

    fn add(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait Identity: Magma {
    /// Identity
    fn id(&self) -> Self::Elem;

    #[inline]
    fn is_id(&self, x: &Self::Elem) -> bool
    where
        Self::Elem: PartialEq,
    {
        *x == self.id()
    }
}

/// `+` over a numeric type, identity zero. Pending deltas compose with this.
#[derive(Clone, Copy, Debug)]
pub struct NumAdditiveGroups<T>(std::marker::PhantomData<T>);

impl<T> NumAdditiveGroups<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumAdditiveGroups<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for NumAdditiveGroups<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }

    #[inline]
    fn is_id(&self, x: &T) -> bool {
        x.is_zero()
    }
}

/// `min` over `Option<T>`, with `None` standing for "no value" (the identity).
///
/// Ranges that miss a query reduce to `None` instead of a large sentinel, so
/// any stored value, `T::max_value()` included, remains a valid minimum.
#[derive(Clone, Copy, Debug)]
pub struct MinMonoid<T>(std::marker::PhantomData<T>);

impl<T> MinMonoid<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: Ord + Clone> Magma for MinMonoid<T> {
    type Elem = Option<T>;

    #[inline]
    fn add(&self, lhs: Option<T>, rhs: Option<T>) -> Option<T> {
        match (lhs, rhs) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (x, None) | (None, x) => x,
        }
    }
}
impl<T: Ord + Clone> Identity for MinMonoid<T> {
    #[inline]
    fn id(&self) -> Option<T> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_monoid_identity() {
        let m = MinMonoid::<i64>::new();
        assert_eq!(m.add(m.id(), Some(3)), Some(3));
        assert_eq!(m.add(Some(-2), m.id()), Some(-2));
        assert_eq!(m.add(m.id(), m.id()), None);
        assert_eq!(m.add(Some(i64::MAX), m.id()), Some(i64::MAX));
    }

    #[test]
    fn min_monoid_picks_smaller() {
        let m = MinMonoid::<i32>::new();
        assert_eq!(m.add(Some(5), Some(-1)), Some(-1));
        assert_eq!(m.add(Some(-1), Some(5)), Some(-1));
    }

    #[test]
    fn additive_identity_is_zero() {
        let g = NumAdditiveGroups::<i32>::new();
        assert!(g.is_id(&g.id()));
        assert!(!g.is_id(&1));
        assert_eq!(g.add(g.id(), -7), -7);
        assert_eq!(g.add(2, 3), 5);
    }
}
