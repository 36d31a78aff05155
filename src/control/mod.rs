//! Algebraic container types.
//!
//! - [`Maybe`]: an optional value (`Some` / `None`)
//! - [`Outcome`]: a success-biased result (`Success` / `Failure`)
//! - [`Either`]: `Outcome` seen through left/right names
//! - [`Tuple`]: an immutable ordered pair
//!
//! Every extraction takes a fallback, so none of these types panics on a
//! tag mismatch.
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::{Maybe, Outcome, Tuple};
//!
//! let lookup = |key: &str| if key == "a" { Maybe::some(1) } else { Maybe::none() };
//!
//! let found: Outcome<i32, String> =
//!     Outcome::from_maybe(lookup("a"), || "no such key".to_string()).map(|n| n + 1);
//! assert_eq!(found, Outcome::succeed(2));
//!
//! let pair = Tuple::create("a", 1).swap();
//! assert_eq!(*pair.fst(), 1);
//! ```

mod either;
mod maybe;
mod outcome;
mod tuple;

pub use either::Either;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use tuple::Tuple;
