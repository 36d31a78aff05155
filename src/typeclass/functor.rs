//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: a `None` stays `None`, a failure stays a failure.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::Maybe;
//! use base_return::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::some(5)), Maybe::some("#5".to_string()));
//! assert_eq!(describe(Maybe::none()), Maybe::none());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// See the module documentation for the laws.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Outcome;
    /// use base_return::typeclass::Functor;
    ///
    /// let x: Outcome<i32, String> = Outcome::succeed(5);
    /// assert_eq!(Functor::fmap(x, |n| n * 2), Outcome::succeed(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left untouched, so this also works when the inner type
    /// is not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Maybe;
    /// use base_return::typeclass::Functor;
    ///
    /// let x = Maybe::some("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), Maybe::some(5));
    /// assert!(x.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Maybe;
    /// use base_return::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).replace("replaced"), Maybe::some("replaced"));
    /// assert_eq!(Maybe::<i32>::none().replace("replaced"), Maybe::none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::effect::IOMonad;
    /// use base_return::typeclass::Functor;
    ///
    /// let io: IOMonad<i32, String> = IOMonad::pure(5);
    /// assert_eq!(io.void(), IOMonad::pure(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

#[cfg(test)]
#[cfg(all(feature = "control", feature = "effect"))]
mod tests {
    use super::*;
    use crate::control::{Maybe, Outcome};
    use crate::effect::IOMonad;
    use rstest::rstest;

    fn scale_all<F: Functor<Inner = i32>>(container: F, factor: &i32) -> F::WithType<i32> {
        container.fmap(|n| n * factor)
    }

    #[rstest]
    fn test_fmap_accepts_closures_borrowing_locals() {
        let factor = 3;
        assert_eq!(scale_all(Maybe::some(2), &factor), Maybe::some(6));
        assert_eq!(
            scale_all(Outcome::<i32, String>::succeed(2), &factor),
            Outcome::succeed(6)
        );
        assert_eq!(
            scale_all(IOMonad::<i32, String>::pure(2), &factor),
            IOMonad::pure(6)
        );
    }

    #[rstest]
    fn test_fmap_ref_can_return_borrowed_data() {
        let labels = vec!["zero".to_string(), "one".to_string()];
        let index = Maybe::some(1_usize);
        let label = index.fmap_ref(|position| labels[*position].as_str());
        assert_eq!(label, Maybe::some("one"));
    }

    #[rstest]
    fn test_replace_with_borrowed_value() {
        let text = String::from("borrowed");
        assert_eq!(Maybe::some(1).replace(text.as_str()), Maybe::some("borrowed"));
    }
}
