//! Additive aggregates with a zero identity.
//!
//! Dice pools and roll tallies are both folded the same way: start from
//! zero and add each part. [`combine_all`] is that fold.

/// A commutative, associative sum with an identity element.
pub trait Additive: Sized {
    /// The identity: `x.add(Self::zero()) == x`.
    fn zero() -> Self;

    /// Componentwise sum.
    fn add(self, other: Self) -> Self;
}

/// Fold any number of values into one, starting at [`Additive::zero`].
pub fn combine_all<T, I>(items: I) -> T
where
    T: Additive,
    I: IntoIterator<Item = T>,
{
    items.into_iter().fold(T::zero(), T::add)
}
