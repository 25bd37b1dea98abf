pub trait Magma {
    type Elem: Clone;

    fn combine(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait Associativity: Magma {}
pub trait Identity: Magma {
    /// Identity
    fn id(&self) -> Self::Elem;
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

/// Sum of numbers. This is the default reducer of a `SegmentTree`.
#[derive(Clone, Copy, Debug)]
pub struct NumAdditiveMonoid<T>(std::marker::PhantomData<T>);

impl<T> Default for NumAdditiveMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumAdditiveMonoid<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumAdditiveMonoid<T> {
    type Elem = T;

    #[inline]
    fn combine(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for NumAdditiveMonoid<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + Clone> Associativity for NumAdditiveMonoid<T> {}

#[derive(Clone, Copy, Debug)]
pub struct NumMultiplicativeMonoid<T>(std::marker::PhantomData<T>);

impl<T> Default for NumMultiplicativeMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumMultiplicativeMonoid<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumMultiplicativeMonoid<T> {
    type Elem = T;

    #[inline]
    fn combine(&self, lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}
impl<T: num::Num + Clone> Identity for NumMultiplicativeMonoid<T> {
    #[inline]
    fn id(&self) -> T {
        T::one()
    }
}
impl<T: num::Num + Clone> Associativity for NumMultiplicativeMonoid<T> {}

/// Minimum over a bounded total order; the identity is `T::max_value()`.
#[derive(Clone, Copy, Debug)]
pub struct MinMonoid<T>(std::marker::PhantomData<T>);

impl<T> Default for MinMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinMonoid<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: Ord + num::Bounded + Clone> Magma for MinMonoid<T> {
    type Elem = T;

    #[inline]
    fn combine(&self, lhs: T, rhs: T) -> T {
        std::cmp::min(lhs, rhs)
    }
}
impl<T: Ord + num::Bounded + Clone> Identity for MinMonoid<T> {
    #[inline]
    fn id(&self) -> T {
        T::max_value()
    }
}
impl<T: Ord + num::Bounded + Clone> Associativity for MinMonoid<T> {}

/// Maximum over a bounded total order; the identity is `T::min_value()`.
#[derive(Clone, Copy, Debug)]
pub struct MaxMonoid<T>(std::marker::PhantomData<T>);

impl<T> Default for MaxMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MaxMonoid<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: Ord + num::Bounded + Clone> Magma for MaxMonoid<T> {
    type Elem = T;

    #[inline]
    fn combine(&self, lhs: T, rhs: T) -> T {
        std::cmp::max(lhs, rhs)
    }
}
impl<T: Ord + num::Bounded + Clone> Identity for MaxMonoid<T> {
    #[inline]
    fn id(&self) -> T {
        T::min_value()
    }
}
impl<T: Ord + num::Bounded + Clone> Associativity for MaxMonoid<T> {}

/// A monoid made of a caller supplied closure and its identity element.
///
/// Associativity of `op` is the caller's promise; it is not checked. `id` is also
/// what a `SegmentTree` returns for an invalid range, so pass the value the
/// caller wants to see there (e.g. `0` to mimic a zero-filled tree).
#[derive(Clone, Copy)]
pub struct FnMonoid<T, F> {
    id: T,
    op: F,
}

/// A reducer picked at runtime.
pub type BoxedMonoid<T> = FnMonoid<T, Box<dyn Fn(T, T) -> T>>;

impl<T: Clone, F: Fn(T, T) -> T> FnMonoid<T, F> {
    #[inline]
    pub fn new(id: T, op: F) -> Self {
        Self { id, op }
    }
}

impl<T: Clone + 'static> BoxedMonoid<T> {
    #[inline]
    pub fn boxed<F: Fn(T, T) -> T + 'static>(id: T, op: F) -> Self {
        Self {
            id,
            op: Box::new(op),
        }
    }
}

impl<T: Clone, F: Fn(T, T) -> T> Magma for FnMonoid<T, F> {
    type Elem = T;

    #[inline]
    fn combine(&self, lhs: T, rhs: T) -> T {
        (self.op)(lhs, rhs)
    }
}
impl<T: Clone, F: Fn(T, T) -> T> Identity for FnMonoid<T, F> {
    #[inline]
    fn id(&self) -> T {
        self.id.clone()
    }
}
impl<T: Clone, F: Fn(T, T) -> T> Associativity for FnMonoid<T, F> {}

impl<T: std::fmt::Debug, F> std::fmt::Debug for FnMonoid<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnMonoid")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn num_monoids() {
        let sum = NumAdditiveMonoid::<i64>::new();
        assert_eq!(sum.id(), 0);
        assert_eq!(sum.combine(40, 2), 42);

        let prd = NumMultiplicativeMonoid::<i64>::new();
        assert_eq!(prd.id(), 1);
        assert_eq!(prd.combine(6, 7), 42);
        assert_eq!(prd.combine(prd.id(), 13), 13);
    }

    #[test]
    fn min_max_identity() {
        let min = MinMonoid::<u8>::new();
        let max = MaxMonoid::<u8>::new();
        assert_eq!(min.id(), u8::MAX);
        assert_eq!(max.id(), 0);
        for x in [0u8, 17, 255].iter().copied() {
            assert_eq!(min.combine(min.id(), x), x);
            assert_eq!(max.combine(x, max.id()), x);
        }
    }

    #[test]
    fn ordered_floats() {
        let min = MinMonoid::<OrderedFloat<f64>>::new();
        let max = MaxMonoid::<OrderedFloat<f64>>::new();
        let (a, b) = (OrderedFloat(-1.5), OrderedFloat(2.25));
        assert_eq!(min.combine(a, b), a);
        assert_eq!(max.combine(a, b), b);
        assert_eq!(min.combine(min.id(), b), b);
        assert_eq!(max.combine(max.id(), a), a);
    }

    #[test]
    fn closures() {
        let concat = FnMonoid::new(String::new(), |a: String, b: String| a + &b);
        assert_eq!(concat.combine("ab".into(), "cd".into()), "abcd");
        assert_eq!(concat.id(), "");

        let ops: Vec<BoxedMonoid<i32>> = vec![
            BoxedMonoid::<i32>::boxed(0, |a, b| a + b),
            BoxedMonoid::<i32>::boxed(1, |a, b| a * b),
        ];
        let results: Vec<_> = ops.iter().map(|m| m.combine(6, 7)).collect();
        assert_eq!(results, vec![13, 42]);
        assert_eq!(format!("{:?}", ops[1]), "FnMonoid { id: 1, .. }");
    }
}
