// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Caller-supplied equality and hashing for element types without native
//! `Eq + Hash`.

use std::sync::Arc;

/// An equality contract over `T`.
///
/// Implementations must uphold `equals(a, b) => hash(a) == hash(b)`. The hash
/// is only used as a pre-filter; equality is always confirmed with
/// [`equals`](Equivalence::equals), so collisions are harmless beyond their
/// cost.
///
/// # Examples
///
/// ```rust
/// use tributary_core::{equivalence, Equivalence};
///
/// // Case-insensitive string equality
/// let contract = equivalence(
///     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
///     |s: &String| s.len() as u64,
/// );
///
/// assert!(contract.equals(&"Rose".to_string(), &"ROSE".to_string()));
/// assert_eq!(contract.hash(&"Rose".to_string()), 4);
/// ```
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` when `a` and `b` are the same element.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Hashes `value` consistently with [`equals`](Equivalence::equals).
    fn hash(&self, value: &T) -> u64;
}

impl<T: ?Sized, E: Equivalence<T> + ?Sized> Equivalence<T> for &E {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

impl<T: ?Sized, E: Equivalence<T> + ?Sized> Equivalence<T> for Box<E> {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

impl<T: ?Sized, E: Equivalence<T> + ?Sized> Equivalence<T> for Arc<E> {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

/// An [`Equivalence`] assembled from an equality closure and a hash closure.
#[derive(Clone, Copy)]
pub struct FnEquivalence<E, H> {
    equals: E,
    hash: H,
}

impl<T: ?Sized, E, H> Equivalence<T> for FnEquivalence<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Builds an equality contract from two closures.
pub fn equivalence<T: ?Sized, E, H>(equals: E, hash: H) -> FnEquivalence<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    FnEquivalence { equals, hash }
}
