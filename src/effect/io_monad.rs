//! IOMonad - a unit of work that may have failed.
//!
//! `IOMonad<V, E>` wraps exactly one [`Outcome<V, E>`] and adds the
//! combinators used to chain fallible steps: success and failure side
//! maps and binds, taps that run a check without replacing the value, and
//! constructors that turn a panic or an `Err` into the failure channel.
//!
//! # Examples
//!
//! ```rust
//! use base_return::effect::IOMonad;
//!
//! let checked = IOMonad::<i32, String>::pure(10)
//!     .fmap(|x| x * 2)
//!     .tap_success(|x| {
//!         if *x < 100 { IOMonad::pure(()) } else { IOMonad::fail("too big".to_string()) }
//!     })
//!     .flat_map(|x| IOMonad::pure(x + 1));
//!
//! assert_eq!(checked.unwrap_success_or_else(|_| 0), 21);
//! ```
//!
//! # Stack Safety
//!
//! Every combinator evaluates against the wrapped outcome immediately and
//! returns a flat value, so a chain of `flat_map` calls of any length runs
//! in constant stack space:
//!
//! ```rust
//! use base_return::effect::IOMonad;
//!
//! let mut chain: IOMonad<u64, ()> = IOMonad::pure(0);
//! for _ in 0..100_000 {
//!     chain = chain.flat_map(|x| IOMonad::pure(x + 1));
//! }
//! assert_eq!(chain, IOMonad::pure(100_000));
//! ```
//!
//! Monadic loops that would otherwise recurse use [`IOMonad::tail_rec`].

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::error::PanicFault;
use crate::control::{Either, Outcome};

/// A computation outcome with success value `V` or error `E`.
///
/// Two instances are equal when they carry the same tag and equal payloads.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IOMonad::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IOMonad::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct IOMonad<V, E> {
    outcome: Outcome<V, E>,
}

impl<V, E> IOMonad<V, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a value into a successful `IOMonad`.
    #[inline]
    pub const fn pure(value: V) -> Self {
        Self {
            outcome: Outcome::Success(value),
        }
    }

    /// Lifts an error into a failed `IOMonad`.
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self {
            outcome: Outcome::Failure(error),
        }
    }

    /// Runs a fallible thunk and moves its `Err` into the failure channel.
    ///
    /// The fault type is whatever error type the thunk returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::effect::IOMonad;
    ///
    /// let parsed = IOMonad::attempt(|| "42".parse::<i32>());
    /// assert_eq!(parsed, IOMonad::pure(42));
    ///
    /// let invalid = IOMonad::attempt(|| "x".parse::<i32>());
    /// assert!(invalid.is_failure());
    /// ```
    #[inline]
    pub fn attempt<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        Self::from(thunk())
    }

    /// Repeats `step` until it produces a right value, in constant stack space.
    ///
    /// `step` returns `Either::left(next_state)` to continue and
    /// `Either::right(value)` to finish. The first failure stops the loop and
    /// is returned as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Either;
    /// use base_return::effect::IOMonad;
    ///
    /// let sum: IOMonad<u64, String> = IOMonad::tail_rec((0_u64, 1_000_000_u64), |(total, n)| {
    ///     if n == 0 {
    ///         IOMonad::pure(Either::right(total))
    ///     } else {
    ///         IOMonad::pure(Either::left((total + n, n - 1)))
    ///     }
    /// });
    /// assert_eq!(sum, IOMonad::pure(500_000_500_000));
    /// ```
    pub fn tail_rec<S, F>(initial: S, mut step: F) -> Self
    where
        F: FnMut(S) -> IOMonad<Either<S, V>, E>,
    {
        let mut state = initial;

        loop {
            // Right finishes, Left carries the next state.
            match step(state).outcome {
                Outcome::Failure(error) => return Self::fail(error),
                Outcome::Success(Outcome::Success(value)) => return Self::pure(value),
                Outcome::Success(Outcome::Failure(next_state)) => state = next_state,
            }
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.outcome.is_failure()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, or `on_failure(error)`.
    ///
    /// `on_failure` is never called on a success.
    #[inline]
    pub fn unwrap_success_or_else<F>(self, on_failure: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        self.outcome.unwrap_or_else(on_failure)
    }

    /// Returns the error, or `on_success(value)`.
    ///
    /// `on_success` is never called on a failure.
    #[inline]
    pub fn unwrap_failure_or_else<F>(self, on_success: F) -> E
    where
        F: FnOnce(V) -> E,
    {
        self.outcome.unwrap_failure_or_else(on_success)
    }

    /// Runs exactly one of two functions depending on the tag.
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(V) -> R,
        G: FnOnce(E) -> R,
    {
        self.outcome.fold(on_success, on_failure)
    }

    /// Borrows the wrapped outcome.
    #[inline]
    pub const fn as_outcome(&self) -> &Outcome<V, E> {
        &self.outcome
    }

    /// Unwraps into the underlying outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<V, E> {
        self.outcome
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        self.outcome.into()
    }

    // =========================================================================
    // Success Channel
    // =========================================================================

    /// Applies `function` to the success value. A failure passes through.
    #[inline]
    pub fn fmap<V2, F>(self, function: F) -> IOMonad<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        IOMonad::from(self.outcome.map(function))
    }

    /// Chains a computation on the success value.
    ///
    /// A failure keeps its original error and `function` is not called.
    /// Widen the error type first with [`fmap_failure`](Self::fmap_failure)
    /// when the next step fails with a different type.
    #[inline]
    pub fn flat_map<V2, F>(self, function: F) -> IOMonad<V2, E>
    where
        F: FnOnce(V) -> IOMonad<V2, E>,
    {
        match self.outcome {
            Outcome::Success(value) => function(value),
            Outcome::Failure(error) => IOMonad::fail(error),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<V2, F>(self, function: F) -> IOMonad<V2, E>
    where
        F: FnOnce(V) -> IOMonad<V2, E>,
    {
        self.flat_map(function)
    }

    /// Runs `function` on the success value for its check, keeping the value.
    ///
    /// If the tap fails, its error replaces this outcome. On a failure,
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::effect::IOMonad;
    ///
    /// let rejected = IOMonad::<i32, &str>::pure(10)
    ///     .tap_success(|_| IOMonad::<(), &str>::fail("rejected"));
    /// assert_eq!(rejected, IOMonad::fail("rejected"));
    /// ```
    #[inline]
    pub fn tap_success<U, F>(self, function: F) -> Self
    where
        F: FnOnce(&V) -> IOMonad<U, E>,
    {
        self.flat_map(|value| function(&value).fmap(|_| value))
    }

    // =========================================================================
    // Failure Channel
    // =========================================================================

    /// Applies `function` to the error. A success passes through.
    #[inline]
    pub fn fmap_failure<E2, F>(self, function: F) -> IOMonad<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        IOMonad::from(self.outcome.map_failure(function))
    }

    /// Chains a computation on the error, e.g. to recover.
    ///
    /// A success passes through and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::effect::IOMonad;
    ///
    /// let recovered: IOMonad<i32, String> = IOMonad::<i32, &str>::fail("missing")
    ///     .flat_map_failure(|_| IOMonad::pure(0));
    /// assert_eq!(recovered, IOMonad::pure(0));
    /// ```
    #[inline]
    pub fn flat_map_failure<E2, F>(self, function: F) -> IOMonad<V, E2>
    where
        F: FnOnce(E) -> IOMonad<V, E2>,
    {
        match self.outcome {
            Outcome::Success(value) => IOMonad::pure(value),
            Outcome::Failure(error) => function(error),
        }
    }

    /// Runs `function` on the error for its side effect, keeping the error.
    ///
    /// If the tap fails, its error replaces the original one. On a success,
    /// `function` is not called.
    #[inline]
    pub fn tap_failure<U, F>(self, function: F) -> Self
    where
        F: FnOnce(&E) -> IOMonad<U, E>,
    {
        self.flat_map_failure(|error| function(&error).flat_map(|_| Self::fail(error)))
    }
}

impl<V> IOMonad<V, PanicFault> {
    /// Runs `thunk` and captures a panic as a [`PanicFault`] failure.
    ///
    /// A normal return becomes `pure`. A panic becomes `fail` with a fault
    /// that still owns the raised payload. This is the only place where the
    /// crate turns an uncontrolled fault into a typed failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::effect::IOMonad;
    ///
    /// let fine = IOMonad::try_catch(|| 10);
    /// assert_eq!(fine, IOMonad::pure(10));
    ///
    /// let broken = IOMonad::<i32, _>::try_catch(|| panic!("failed"));
    /// assert_eq!(broken.unwrap_failure_or_else(|_| unreachable!()).message, "failed");
    /// ```
    pub fn try_catch<F>(thunk: F) -> Self
    where
        F: FnOnce() -> V,
    {
        match catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(value) => Self::pure(value),
            Err(payload) => {
                let fault = PanicFault::from_payload(payload);
                #[cfg(feature = "tracing")]
                tracing::warn!(panic_message = %fault.message, "captured panic as failure");
                Self::fail(fault)
            }
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<V, E> From<Outcome<V, E>> for IOMonad<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        Self { outcome }
    }
}

impl<V, E> From<Result<V, E>> for IOMonad<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Self {
            outcome: Outcome::from(result),
        }
    }
}

impl<V, E> From<IOMonad<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(io_monad: IOMonad<V, E>) -> Self {
        io_monad.outcome
    }
}

static_assertions::assert_impl_all!(IOMonad<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(IOMonad<i32, PanicFault>: Send);

// =============================================================================
// Type Class Instances
// =============================================================================

#[cfg(feature = "typeclass")]
use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

#[cfg(feature = "typeclass")]
impl<V, E> TypeConstructor for IOMonad<V, E> {
    type Inner = V;
    type WithType<B> = IOMonad<B, E>;
}

#[cfg(feature = "typeclass")]
impl<V, E: Clone> Functor for IOMonad<V, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> IOMonad<B, E>
    where
        F: FnOnce(V) -> B,
    {
        Self::fmap(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> IOMonad<B, E>
    where
        F: FnOnce(&V) -> B,
    {
        match &self.outcome {
            Outcome::Success(value) => IOMonad::pure(function(value)),
            Outcome::Failure(error) => IOMonad::fail(error.clone()),
        }
    }
}

#[cfg(feature = "typeclass")]
impl<V, E: Clone> Applicative for IOMonad<V, E> {
    #[inline]
    fn pure<B>(value: B) -> IOMonad<B, E> {
        IOMonad::pure(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: IOMonad<B, E>, function: F) -> IOMonad<C, E>
    where
        F: FnOnce(V, B) -> C,
    {
        self.flat_map(|a| other.fmap(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: IOMonad<B, E>,
        third: IOMonad<C, E>,
        function: F,
    ) -> IOMonad<D, E>
    where
        F: FnOnce(V, B, C) -> D,
    {
        self.flat_map(|a| second.flat_map(|b| third.fmap(|c| function(a, b, c))))
    }

    #[inline]
    fn apply<B, Output>(self, other: IOMonad<B, E>) -> IOMonad<Output, E>
    where
        V: FnOnce(B) -> Output,
    {
        self.flat_map(|function| other.fmap(function))
    }
}

#[cfg(feature = "typeclass")]
impl<V, E: Clone> Monad for IOMonad<V, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> IOMonad<B, E>
    where
        F: FnOnce(V) -> IOMonad<B, E>,
    {
        Self::flat_map(self, function)
    }
}

/// `IOMonad<V, E>` is implemented as `Bifunctor<E, V>`, error first, the
/// same ordering as `Outcome`.
#[cfg(feature = "typeclass")]
impl<V, E> Bifunctor<E, V> for IOMonad<V, E> {
    type Target<C, D> = IOMonad<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> IOMonad<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(V) -> D,
    {
        IOMonad::from(self.outcome.map_both(second_function, first_function))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> IOMonad<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&V) -> D,
    {
        IOMonad::from(self.outcome.as_ref().map_both(second_function, first_function))
    }
}
