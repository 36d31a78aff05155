//! Turning many `IOMonad`s into one.
//!
//! [`sequence`] and [`traverse`] pull their input in order and stop at the
//! first failure; later items are never pulled from the iterator. The same
//! contract backs `FromIterator`, so `collect()` works too:
//!
//! ```rust
//! use base_return::effect::IOMonad;
//!
//! let collected: IOMonad<Vec<i32>, String> =
//!     (1..=3).map(IOMonad::pure).collect();
//! assert_eq!(collected, IOMonad::pure(vec![1, 2, 3]));
//! ```

use super::io_monad::IOMonad;
use crate::control::Outcome;

/// Collects the success values of `items` in order.
///
/// Returns the first failure as is. Empty input gives `pure(vec![])`.
///
/// # Examples
///
/// ```rust
/// use base_return::effect::{IOMonad, sequence};
///
/// let all = sequence(vec![IOMonad::<i32, &str>::pure(1), IOMonad::pure(2), IOMonad::pure(3)]);
/// assert_eq!(all, IOMonad::pure(vec![1, 2, 3]));
///
/// let first_error = sequence(vec![IOMonad::pure(1), IOMonad::fail("E"), IOMonad::pure(3)]);
/// assert_eq!(first_error, IOMonad::fail("E"));
/// ```
pub fn sequence<V, E, I>(items: I) -> IOMonad<Vec<V>, E>
where
    I: IntoIterator<Item = IOMonad<V, E>>,
{
    items.into_iter().collect()
}

/// Applies `function` to each item in order and sequences the results.
///
/// `function` is not called for any item after the first failure.
///
/// # Examples
///
/// ```rust
/// use base_return::effect::{IOMonad, traverse};
///
/// let parsed = traverse(["1", "2", "x", "4"], |text| IOMonad::attempt(|| text.parse::<i32>()));
/// assert!(parsed.is_failure());
/// ```
pub fn traverse<T, V, E, I, F>(items: I, function: F) -> IOMonad<Vec<V>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> IOMonad<V, E>,
{
    items.into_iter().map(function).collect()
}

/// Yields success values until the first failure, which it stores.
struct UntilFailure<'a, I, E> {
    items: I,
    failure: &'a mut Option<E>,
}

impl<I, V, E> Iterator for UntilFailure<'_, I, E>
where
    I: Iterator<Item = IOMonad<V, E>>,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.failure.is_some() {
            return None;
        }
        match self.items.next()?.into_outcome() {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(error) => {
                *self.failure = Some(error);
                None
            }
        }
    }
}

impl<V, E, C> FromIterator<IOMonad<V, E>> for IOMonad<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = IOMonad<V, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = UntilFailure {
            items: iter.into_iter(),
            failure: &mut failure,
        }
        .collect();

        match failure {
            Some(error) => Self::fail(error),
            None => Self::pure(collected),
        }
    }
}
