//! # base-return
//!
//! Explicit success/failure and presence/absence containers, with a small
//! effect wrapper for chaining fallible steps.
//!
//! ## Overview
//!
//! - **Control**: [`Maybe`](control::Maybe), [`Outcome`](control::Outcome)
//!   (and its left/right view [`Either`](control::Either)), and the pair
//!   [`Tuple`](control::Tuple)
//! - **Effect**: [`IOMonad`](effect::IOMonad) for composing fallible steps,
//!   panic capture, and [`sequence`](effect::sequence) for collecting many
//!   of them
//! - **Type Classes**: Functor, Applicative, Monad and Bifunctor instances
//!   for the types above
//!
//! Reading a payload always takes a fallback. Nothing in this crate panics
//! because a value was missing or a computation failed.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe`, `Outcome`, `Either`, `Tuple`
//! - `effect`: `IOMonad` and sequencing (implies `control`)
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `tracing`: log captured panics through `tracing`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use base_return::prelude::*;
//!
//! let total = IOMonad::<i32, String>::pure(20)
//!     .flat_map(|n| IOMonad::pure(n + 1))
//!     .fmap(|n| n * 2);
//! assert_eq!(total.unwrap_success_or_else(|_| 0), 42);
//!
//! let collected = sequence(vec![IOMonad::<i32, String>::pure(1), IOMonad::pure(2)]);
//! assert_eq!(collected.into_outcome(), Outcome::succeed(vec![1, 2]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use base_return::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
