//! Bifunctor type class - mapping over two type parameters.
//!
//! While `Functor` transforms `F<A>` into `F<B>`, `Bifunctor` transforms
//! `F<A, B>` into `F<C, D>`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Parameter Order for Outcome and IOMonad
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>` (and `IOMonad<V, E>`
//! as `Bifunctor<E, V>`):
//! - `first` transforms the error, like `map_failure` / `fmap_failure`
//! - `second` transforms the success value, like `map` / `fmap`
//!
//! This matches the `Left`/`Right` reading of [`Either`](crate::control::Either),
//! so `Either::bimap(on_left, on_right)` and `Bifunctor::bimap` agree.
//!
//! # Examples
//!
//! ```rust
//! use base_return::control::{Outcome, Tuple};
//! use base_return::typeclass::Bifunctor;
//!
//! let failed: Outcome<i32, String> = Outcome::fail("boom".to_string());
//! assert_eq!(failed.first(|error| error.len()), Outcome::fail(4));
//!
//! let pair = Tuple::create(42, "hello".to_string());
//! assert_eq!(pair.bimap(|x| x * 2, |s| s.len()), Tuple::create(84, 5));
//! ```

/// A type class for types with two type parameters that can both be mapped.
///
/// See the module documentation for the laws.
pub trait Bifunctor<A, B> {
    /// The resulting type after applying the transformation.
    ///
    /// For `Outcome<T, E>` (as `Bifunctor<E, T>`), `Target<C, D> = Outcome<D, C>`.
    /// For `Tuple<A, B>`, `Target<C, D> = Tuple<C, D>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use base_return::control::Tuple;
    /// use base_return::typeclass::Bifunctor;
    ///
    /// let pair = Tuple::create(1, "one");
    /// assert_eq!(pair.second(str::len), Tuple::create(1, 3));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without
    /// consuming `self`.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first type parameter.
    ///
    /// Requires `B: Clone` because the untransformed value must be cloned.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, |b| b.clone())
    }

    /// Applies a function to a reference of the second type parameter.
    ///
    /// Requires `A: Clone` because the untransformed value must be cloned.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(|a| a.clone(), function)
    }
}
