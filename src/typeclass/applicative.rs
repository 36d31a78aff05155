//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with [`pure`](Applicative::pure), which
//! lifts a plain value, and [`map2`](Applicative::map2), which combines two
//! independent values in the same context. For the success-biased types of
//! this crate the first failure (left to right) wins.
//!
//! # Laws
//!
//! ```text
//! pure(x).map2(fa, |_, a| a) == fa             (left identity)
//! fa.map2(pure(x), |a, _| a) == fa             (right identity)
//! fa.map2(fb, f).fmap(g) == fa.map2(fb, |a, b| g(f(a, b)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::Maybe;
//! use base_return::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::some(42));
//!
//! let sum = Maybe::some(3).map2(Maybe::some(4), |a, b| a + b);
//! assert_eq!(sum, Maybe::some(7));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Outcome;
    /// use base_return::typeclass::Applicative;
    ///
    /// let y: Outcome<String, ()> = <Outcome<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Outcome::succeed("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Outcome;
    /// use base_return::typeclass::Applicative;
    ///
    /// let a: Outcome<i32, &str> = Outcome::fail("first");
    /// let b: Outcome<i32, &str> = Outcome::fail("second");
    /// assert_eq!(a.map2(b, |x, y| x + y), Outcome::fail("first"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Maybe;
    /// use base_return::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::some(1).product(Maybe::some("a")), Maybe::some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value held in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Maybe;
    /// use base_return::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::some(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::some(5)), Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
