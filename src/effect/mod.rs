//! Failure-propagating computations.
//!
//! - [`IOMonad`]: a unit of work holding either a value or an error, with
//!   success-side and failure-side combinators
//! - [`sequence`] / [`traverse`]: many `IOMonad`s into one, stopping at the
//!   first failure
//! - [`PanicFault`]: the error produced when [`IOMonad::try_catch`]
//!   captures a panic
//!
//! # Examples
//!
//! ```rust
//! use base_return::effect::{IOMonad, sequence};
//!
//! let steps = vec![IOMonad::<i32, String>::pure(1), IOMonad::pure(2)];
//! let total = sequence(steps).fmap(|values| values.iter().sum::<i32>());
//! assert_eq!(total, IOMonad::pure(3));
//!
//! let guarded = IOMonad::try_catch(|| 10 / 2);
//! assert_eq!(guarded, IOMonad::pure(5));
//! ```

mod error;
mod io_monad;
mod sequence;

pub use error::PanicFault;
pub use io_monad::IOMonad;
pub use sequence::{sequence, traverse};
