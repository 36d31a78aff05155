//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with [`flat_map`](Monad::flat_map): the
//! next step may depend on the previous value. For the types in this crate
//! `flat_map` short-circuits, so a `None` or a failure ends the chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::Maybe;
//! use base_return::typeclass::{Applicative, Monad};
//!
//! fn halve<M>(m: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     m.flat_map(|n| M::pure(n / 2))
//! }
//!
//! assert_eq!(halve(Maybe::some(10)), Maybe::some(5));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// See the module documentation for the laws.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Maybe;
    /// use base_return::typeclass::Monad;
    ///
    /// let at_least_ten = |n: i32| if n >= 10 { Maybe::some(n) } else { Maybe::none() };
    ///
    /// assert_eq!(Monad::flat_map(Maybe::some(12), at_least_ten), Maybe::some(12));
    /// assert_eq!(Monad::flat_map(Maybe::some(5), at_least_ten), Maybe::none());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// A failing `self` is propagated and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Outcome;
    /// use base_return::typeclass::Monad;
    ///
    /// let first: Outcome<i32, &str> = Outcome::fail("stop");
    /// assert_eq!(first.then(Outcome::succeed("next")), Outcome::fail("stop"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
