// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Three-way comparison contract used by the sort operators.

use core::cmp::Ordering;
use core::marker::PhantomData;

/// A caller-supplied three-way comparator over `T`.
///
/// The comparator must describe a consistent total preorder. Ties
/// (`Ordering::Equal`) are permitted and expected; the sort operators resolve
/// them with further levels and, ultimately, by keeping the original order.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```rust
/// use core::cmp::Ordering;
/// use tributary_core::{by_key, Comparator};
///
/// let by_len = by_key(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"fern", &"oak"), Ordering::Greater);
///
/// let reversed = |a: &i32, b: &i32| b.cmp(a);
/// assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares elements by their natural [`Ord`] ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Returns the [`Natural`] comparator.
#[must_use]
pub const fn natural() -> Natural {
    Natural
}

/// Compares elements by the natural ordering of a derived key.
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<T: ?Sized, K, F> Comparator<T> for ByKey<F, K>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Builds a comparator ordering elements by `key`.
///
/// The key is recomputed on every comparison, so it should be cheap.
pub const fn by_key<F, K>(key: F) -> ByKey<F, K> {
    ByKey {
        key,
        _key: PhantomData,
    }
}
