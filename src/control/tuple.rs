//! Tuple - an immutable ordered pair.

/// An ordered pair of two values.
///
/// # Examples
///
/// ```rust
/// use base_return::control::Tuple;
///
/// let pair = Tuple::create(10, 11);
/// let swapped = pair.swap();
///
/// assert_eq!((*swapped.fst(), *swapped.snd()), (11, 10));
/// assert_eq!((*pair.fst(), *pair.snd()), (10, 11));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple<A, B> {
    /// Creates a pair from its two slots.
    #[inline]
    pub const fn create(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the first slot.
    #[inline]
    pub const fn fst(&self) -> &A {
        &self.first
    }

    /// Returns the second slot.
    #[inline]
    pub const fn snd(&self) -> &B {
        &self.second
    }

    /// Returns a new pair with the slots exchanged.
    #[inline]
    pub fn swap(self) -> Tuple<B, A> {
        Tuple::create(self.second, self.first)
    }

    /// Splits the pair into a standard tuple.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::create(first, second)
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    #[inline]
    fn from(tuple: Tuple<A, B>) -> Self {
        tuple.into_parts()
    }
}

#[cfg(feature = "typeclass")]
impl<A, B> crate::typeclass::Bifunctor<A, B> for Tuple<A, B> {
    type Target<C, D> = Tuple<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Tuple<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Tuple::create(first_function(self.first), second_function(self.second))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Tuple<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        Tuple::create(first_function(&self.first), second_function(&self.second))
    }
}
