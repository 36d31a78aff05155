//! Maybe type - an optional value.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. It mirrors the standard
//! library's `Option` but uses the extraction contract of this crate:
//! every way of reading a payload takes a fallback, so nothing ever panics
//! on a missing value.
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::Maybe;
//!
//! let present = Maybe::some(20).map(|n| n + 1);
//! assert_eq!(present.unwrap_or_else(|| 0), 21);
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.unwrap_or_else(|| 0), 0);
//! ```

use super::outcome::Outcome;

/// An optional value: `Some(T)` or `None`.
///
/// # Laws
///
/// - **Functor identity**: `m.map(|x| x) == m`
/// - **Functor composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
/// - **Left identity**: `Maybe::some(a).flat_map(f) == f(a)`
/// - **Right identity**: `m.flat_map(Maybe::some) == m`
///
/// # Examples
///
/// ```rust
/// use base_return::control::Maybe;
///
/// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
///
/// assert_eq!(Maybe::some(8).flat_map(half), Maybe::some(4));
/// assert_eq!(Maybe::some(7).flat_map(half), Maybe::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    /// Wraps a value in `Some`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Maybe`. No default value of `T` is needed.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the held value, or the result of `on_none`.
    ///
    /// `on_none` is never called when this is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).unwrap_or_else(|| unreachable!()), 1);
    /// assert_eq!(Maybe::<i32>::none().unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, on_none: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(|value| value, on_none)
    }

    /// Eliminates the `Maybe` by running exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::some(3)), "got 3");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_some: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Applies `function` to the held value. `None` passes through.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies `function` to the held value and returns its result directly.
    /// `None` passes through without calling `function`.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts into an [`Outcome`], using `on_none` to build the error.
    ///
    /// Same as [`Outcome::from_maybe`].
    #[inline]
    pub fn to_outcome<E, F>(self, on_none: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        Outcome::from_maybe(self, on_none)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync);

// =============================================================================
// Type Class Instances
// =============================================================================

#[cfg(feature = "typeclass")]
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

#[cfg(feature = "typeclass")]
impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

#[cfg(feature = "typeclass")]
impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}
