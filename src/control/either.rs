//! Either - [`Outcome`] seen through left/right names.
//!
//! `Either<L, R>` is an alias of `Outcome<R, L>`: `Left` is the
//! failure-like side, `Right` the success-like side. There is a single
//! implementation; the methods in this module only rename the channels,
//! and `flat_map` on an `Either` is [`Outcome::flat_map`] (right-biased).
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::Either;
//!
//! let left: Either<String, i32> = Either::left("error".to_string());
//! let right: Either<String, i32> = Either::right(42);
//!
//! assert!(left.is_left());
//! assert_eq!(right.map_right(|n| n * 2).unwrap_right_or_else(|_| 0), 84);
//!
//! let text = left.either(|error| format!("left: {error}"), |n| n.to_string());
//! assert_eq!(text, "left: error");
//! ```

use super::maybe::Maybe;
use super::outcome::Outcome;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Represented as `Outcome<R, L>`; `Left` is stored as `Failure` and
/// `Right` as `Success`.
pub type Either<L, R> = Outcome<R, L>;

impl<R, L> Outcome<R, L> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Failure(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Success(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        self.is_failure()
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        self.is_success()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, or `on_right(value)` for a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.unwrap_left_or_else(|s| s.len() as i32), 5);
    /// ```
    #[inline]
    pub fn unwrap_left_or_else<F>(self, on_right: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        self.unwrap_failure_or_else(on_right)
    }

    /// Returns the right value, or `on_left(value)` for a `Left`.
    #[inline]
    pub fn unwrap_right_or_else<F>(self, on_left: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.unwrap_or_else(on_left)
    }

    /// Converts into `Some(l)` for `Left(l)`, otherwise `None`.
    #[inline]
    pub fn into_left(self) -> Maybe<L> {
        self.failure()
    }

    /// Converts into `Some(r)` for `Right(r)`, otherwise `None`.
    #[inline]
    pub fn into_right(self) -> Maybe<R> {
        self.success()
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions, left first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.either(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(on_right, on_left)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.map_failure(function)
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map(function)
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::left(84));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, on_left: F, on_right: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        self.map_both(on_right, on_left)
    }
}
