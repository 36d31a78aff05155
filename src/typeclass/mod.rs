//! Type class traits for the container types.
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Bifunctor`]: mapping over both channels
//!
//! Instances are provided for `Maybe`, `Outcome` and `IOMonad`
//! (functor, applicative, monad), and for `Outcome`, `IOMonad` and `Tuple`
//! (bifunctor). The inherent methods of those types behave exactly like
//! the trait methods; the traits exist so code can be generic over them.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same container with a different inner
//! type", which is what the traits above need.
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::{Maybe, Outcome};
//! use base_return::typeclass::Applicative;
//!
//! fn add<F>(left: F, right: F::WithType<i32>) -> F::WithType<i32>
//! where
//!     F: Applicative<Inner = i32>,
//! {
//!     left.map2(right, |a, b| a + b)
//! }
//!
//! assert_eq!(add(Maybe::some(1), Maybe::some(2)), Maybe::some(3));
//!
//! let failed: Outcome<i32, &str> = Outcome::fail("left");
//! assert_eq!(add(failed, Outcome::succeed(2)), Outcome::fail("left"));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
