//! Outcome type - the result of a computation that may fail.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It is
//! success-biased: [`map`](Outcome::map) and [`flat_map`](Outcome::flat_map)
//! act on the success channel and leave a failure untouched. The
//! failure channel has its own combinators ([`map_failure`](Outcome::map_failure),
//! [`unwrap_failure_or_else`](Outcome::unwrap_failure_or_else)).
//!
//! [`Either`](super::Either) is the same type seen through left/right names.
//! Because it is an alias, the left/right methods (`left`, `right`,
//! `is_left`, `is_right`, `either`, `map_left`, `map_right`, `bimap`, ...)
//! are also callable on any `Outcome`. They are plain renames: `Left` is
//! `Failure` and `Right` is `Success`, so `Outcome::left(e)` is
//! `Outcome::fail(e)` and `is_right` is `is_success`.
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::{Maybe, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::from(input.parse::<i32>().map_err(|error| error.to_string()))
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::succeed(42));
//!
//! let missing = Outcome::from_maybe(Maybe::<i32>::none(), || "missing".to_string());
//! assert_eq!(missing.failure(), Maybe::some("missing".to_string()));
//! ```

use super::maybe::Maybe;

/// The outcome of a computation: `Success(T)` or `Failure(E)`.
///
/// Once built, the tag never changes through a combinator on the other
/// channel: `map` on a failure and `map_failure` on a success return the
/// value as it was.
///
/// # Laws
///
/// - **Functor identity**: `o.map(|x| x) == o`
/// - **Left identity**: `Outcome::succeed(a).flat_map(f) == f(a)`
/// - **Right identity**: `o.flat_map(Outcome::succeed) == o`
/// - **Associativity**: `o.flat_map(f).flat_map(g) == o.flat_map(|x| f(x).flat_map(g))`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation succeeded.
    Success(T),
    /// The computation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::Failure(error)
    }

    /// Builds an outcome from a [`Maybe`].
    ///
    /// `Some(v)` becomes `Success(v)`; `None` becomes `Failure(on_none())`.
    /// `on_none` is only called for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::{Maybe, Outcome};
    ///
    /// let found: Outcome<i32, &str> = Outcome::from_maybe(Maybe::some(5), || "absent");
    /// assert_eq!(found, Outcome::succeed(5));
    ///
    /// let absent: Outcome<i32, &str> = Outcome::from_maybe(Maybe::none(), || "absent");
    /// assert_eq!(absent, Outcome::fail("absent"));
    /// ```
    #[inline]
    pub fn from_maybe<F>(maybe: Maybe<T>, on_none: F) -> Self
    where
        F: FnOnce() -> E,
    {
        maybe.fold(Self::succeed, || Self::fail(on_none()))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, or `on_failure(error)` for a failure.
    ///
    /// `on_failure` is never called on a success.
    #[inline]
    pub fn unwrap_or_else<F>(self, on_failure: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the failure value, or `on_success(value)` for a success.
    ///
    /// `on_success` is never called on a failure.
    #[inline]
    pub fn unwrap_failure_or_else<F>(self, on_success: F) -> E
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => error,
        }
    }

    /// Projects the success channel into a [`Maybe`].
    #[inline]
    pub fn success(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Projects the failure channel into a [`Maybe`].
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(error) => Maybe::Some(error),
        }
    }

    /// Borrows both channels.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Eliminates the outcome by running exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::fail("boom".to_string());
    /// let message = outcome.fold(|n| n.to_string(), |error| format!("error: {error}"));
    /// assert_eq!(message, "error: boom");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value. A failure passes through.
    #[inline]
    pub fn map<T2, F>(self, function: F) -> Outcome<T2, E>
    where
        F: FnOnce(T) -> T2,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the failure value. A success passes through.
    ///
    /// This is also how an error type is widened: `map_failure(Into::into)`.
    #[inline]
    pub fn map_failure<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies `on_success` or `on_failure` depending on the tag.
    ///
    /// The tag is kept; only the payload (and its type) changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::succeed(2);
    /// assert_eq!(success.map_both(|n| n * 10, str::len), Outcome::succeed(20));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::fail("four");
    /// assert_eq!(failure.map_both(|n| n * 10, str::len), Outcome::fail(4));
    /// ```
    #[inline]
    pub fn map_both<T2, E2, F, G>(self, on_success: F, on_failure: G) -> Outcome<T2, E2>
    where
        F: FnOnce(T) -> T2,
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(on_success(value)),
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
        }
    }

    /// Chains a computation on the success value.
    ///
    /// A failure is returned with its original error and `function` is not
    /// called.
    #[inline]
    pub fn flat_map<T2, F>(self, function: F) -> Outcome<T2, E>
    where
        F: FnOnce(T) -> Outcome<T2, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, &'static str>: Copy, Send, Sync);

// =============================================================================
// Type Class Instances
// =============================================================================

#[cfg(feature = "typeclass")]
use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

#[cfg(feature = "typeclass")]
impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(feature = "typeclass")]
impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

#[cfg(feature = "typeclass")]
impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

#[cfg(feature = "typeclass")]
impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        Self::flat_map(self, function)
    }
}

/// `Outcome<T, E>` is implemented as `Bifunctor<E, T>`:
/// - `first`: transforms the error (E), like `map_failure`
/// - `second`: transforms the success value (T), like `map`
#[cfg(feature = "typeclass")]
impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        self.map_both(second_function, first_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().map_both(second_function, first_function)
    }
}
