//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>`
//! directly. [`TypeConstructor`] names the applied type parameter and
//! the same constructor applied to another type, which is enough to state
//! `Functor`, `Applicative` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use base_return::control::Maybe;
//! use base_return::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Maybe<String> = empty_like(Maybe::some(42));
//! assert_eq!(none_string, Maybe::none());
//! ```

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Outcome<i32, E>`, `WithType<String>` is `Outcome<String, E>`:
    /// only the success parameter varies.
    type WithType<B>: TypeConstructor<Inner = B>;
}
