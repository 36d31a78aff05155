//! Property-based tests for the type class laws.
//!
//! Verifies, for `Maybe`, `Outcome`, `IOMonad` and `Tuple`:
//!
//! - **Functor**: identity and composition
//! - **Applicative**: `map2` agrees with nested `flat_map`, `pure` is neutral
//! - **Monad**: left identity, right identity and associativity
//! - **Bifunctor**: identity, composition and first/second consistency
//!
//! Trait methods are called through the trait path so the instances are
//! exercised rather than the inherent methods of the same name.

use base_return::control::{Maybe, Outcome, Tuple};
use base_return::effect::IOMonad;
use base_return::typeclass::{Applicative, Bifunctor, Functor, Monad};
use proptest::prelude::*;

// =============================================================================
// Strategies and Helpers
// =============================================================================

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::<i32>::from)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::<i32, String>::from)
}

fn io_monad_strategy() -> impl Strategy<Value = IOMonad<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(IOMonad::<i32, String>::from)
}

fn tuple_strategy() -> impl Strategy<Value = Tuple<i32, String>> {
    (any::<i32>(), any::<String>()).prop_map(Tuple::<i32, String>::from)
}

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn half_maybe(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
}

fn positive_maybe(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::some(n) } else { Maybe::none() }
}

fn half_outcome(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 { Outcome::succeed(n / 2) } else { Outcome::fail(format!("{n} is odd")) }
}

fn positive_outcome(n: i32) -> Outcome<i32, String> {
    if n > 0 { Outcome::succeed(n) } else { Outcome::fail(format!("{n} is not positive")) }
}

fn half_io(n: i32) -> IOMonad<i32, String> {
    IOMonad::from(half_outcome(n))
}

fn positive_io(n: i32) -> IOMonad<i32, String> {
    IOMonad::from(positive_outcome(n))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_functor_identity(value in maybe_strategy()) {
        prop_assert_eq!(Functor::fmap(value, |x| x), value);
    }

    #[test]
    fn prop_maybe_functor_composition(value in maybe_strategy()) {
        let left = Functor::fmap(Functor::fmap(value, increment), double);
        let right = Functor::fmap(value, |x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_functor_identity(value in outcome_strategy()) {
        prop_assert_eq!(Functor::fmap(value.clone(), |x| x), value);
    }

    #[test]
    fn prop_outcome_functor_composition(value in outcome_strategy()) {
        let left = Functor::fmap(Functor::fmap(value.clone(), increment), double);
        let right = Functor::fmap(value, |x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_fmap_ref_matches_fmap(value in outcome_strategy()) {
        let by_ref = value.fmap_ref(|x| increment(*x));
        prop_assert_eq!(by_ref, Functor::fmap(value, increment));
    }

    #[test]
    fn prop_io_monad_functor_identity(value in io_monad_strategy()) {
        prop_assert_eq!(Functor::fmap(value.clone(), |x| x), value);
    }

    #[test]
    fn prop_io_monad_functor_composition(value in io_monad_strategy()) {
        let left = Functor::fmap(Functor::fmap(value.clone(), increment), double);
        let right = Functor::fmap(value, |x| double(increment(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_map2_matches_flat_map(first in maybe_strategy(), second in maybe_strategy()) {
        let combined = Applicative::map2(first, second, i32::wrapping_add);
        let sequenced = first.flat_map(|a| second.map(|b| a.wrapping_add(b)));
        prop_assert_eq!(combined, sequenced);
    }

    #[test]
    fn prop_outcome_map2_matches_flat_map(first in outcome_strategy(), second in outcome_strategy()) {
        let combined = Applicative::map2(first.clone(), second.clone(), i32::wrapping_add);
        let sequenced = first.flat_map(|a| second.map(|b| a.wrapping_add(b)));
        prop_assert_eq!(combined, sequenced);
    }

    #[test]
    fn prop_io_monad_map2_matches_flat_map(first in io_monad_strategy(), second in io_monad_strategy()) {
        let combined = Applicative::map2(first.clone(), second.clone(), i32::wrapping_add);
        let sequenced = first.flat_map(|a| second.fmap(|b| a.wrapping_add(b)));
        prop_assert_eq!(combined, sequenced);
    }

    #[test]
    fn prop_outcome_pure_is_neutral_in_map2(value in outcome_strategy(), constant in any::<i32>()) {
        let pure: Outcome<i32, String> = <Outcome<i32, String> as Applicative>::pure(constant);
        let combined = Applicative::map2(value.clone(), pure, |a, _| a);
        prop_assert_eq!(combined, value);
    }

    #[test]
    fn prop_maybe_apply_matches_fmap(value in maybe_strategy()) {
        let function: Maybe<fn(i32) -> i32> = Maybe::some(increment);
        prop_assert_eq!(Applicative::apply(function, value), Functor::fmap(value, increment));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Monad::flat_map(Maybe::some(value), half_maybe), half_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(Monad::flat_map(value, Maybe::some), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = Monad::flat_map(Monad::flat_map(value, half_maybe), positive_maybe);
        let right = Monad::flat_map(value, |x| Monad::flat_map(half_maybe(x), positive_maybe));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Monad::flat_map(Outcome::succeed(value), half_outcome), half_outcome(value));
    }

    #[test]
    fn prop_outcome_right_identity(value in outcome_strategy()) {
        prop_assert_eq!(Monad::flat_map(value.clone(), Outcome::succeed), value);
    }

    #[test]
    fn prop_outcome_associativity(value in outcome_strategy()) {
        let left = Monad::flat_map(Monad::flat_map(value.clone(), half_outcome), positive_outcome);
        let right = Monad::flat_map(value, |x| Monad::flat_map(half_outcome(x), positive_outcome));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_io_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Monad::flat_map(IOMonad::pure(value), half_io), half_io(value));
    }

    #[test]
    fn prop_io_monad_right_identity(value in io_monad_strategy()) {
        prop_assert_eq!(Monad::flat_map(value.clone(), IOMonad::pure), value);
    }

    #[test]
    fn prop_io_monad_associativity(value in io_monad_strategy()) {
        let left = Monad::flat_map(Monad::flat_map(value.clone(), half_io), positive_io);
        let right = Monad::flat_map(value, |x| Monad::flat_map(half_io(x), positive_io));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Bifunctor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_bifunctor_identity(value in outcome_strategy()) {
        prop_assert_eq!(Bifunctor::bimap(value.clone(), |e: String| e, |x: i32| x), value);
    }

    #[test]
    fn prop_outcome_bifunctor_composition(value in outcome_strategy()) {
        let left = Bifunctor::bimap(
            Bifunctor::bimap(value.clone(), |e: String| e.len(), increment),
            |n: usize| n.wrapping_mul(3),
            double,
        );
        let right = Bifunctor::bimap(
            value,
            |e: String| e.len().wrapping_mul(3),
            |x| double(increment(x)),
        );
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_first_second_consistency(value in outcome_strategy()) {
        let both = Bifunctor::bimap(value.clone(), |e: String| e.len(), increment);
        let first_then_second =
            Bifunctor::second(Bifunctor::first(value.clone(), |e: String| e.len()), increment);
        let second_then_first =
            Bifunctor::first(Bifunctor::second(value, increment), |e: String| e.len());
        prop_assert_eq!(&both, &first_then_second);
        prop_assert_eq!(both, second_then_first);
    }

    #[test]
    fn prop_outcome_bimap_matches_either_bimap(value in outcome_strategy()) {
        let through_trait = Bifunctor::bimap(value.clone(), |e: String| e.len(), increment);
        prop_assert_eq!(value.bimap(|e| e.len(), increment), through_trait);
    }

    #[test]
    fn prop_io_monad_bifunctor_identity(value in io_monad_strategy()) {
        prop_assert_eq!(Bifunctor::bimap(value.clone(), |e: String| e, |x: i32| x), value);
    }

    #[test]
    fn prop_io_monad_first_matches_fmap_failure(value in io_monad_strategy()) {
        let through_trait = Bifunctor::first(value.clone(), |e: String| e.len());
        prop_assert_eq!(through_trait, value.fmap_failure(|e| e.len()));
    }

    #[test]
    fn prop_tuple_bifunctor_identity(value in tuple_strategy()) {
        prop_assert_eq!(Bifunctor::bimap(value.clone(), |a: i32| a, |b: String| b), value);
    }

    #[test]
    fn prop_tuple_first_second_consistency(value in tuple_strategy()) {
        let both = value.clone().bimap(increment, |s: String| s.len());
        let split = value.clone().first(increment).second(|s: String| s.len());
        let by_ref = value.bimap_ref(|a| increment(*a), String::len);
        prop_assert_eq!(&both, &split);
        prop_assert_eq!(both, by_ref);
    }
}
