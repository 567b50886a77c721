// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ahash::AHashSet;
use core::hash::Hash;
use core::marker::PhantomData;
use tributary_core::Sequence;

/// Sequence returned by [`DistinctByKeyExt::distinct_by_key`].
pub struct DistinctByKey<S, F, K> {
    source: S,
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<S: Clone, F: Clone, K> Clone for DistinctByKey<S, F, K> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<S, F, K> Sequence for DistinctByKey<S, F, K>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Eq + Hash,
{
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut seen = AHashSet::new();

        self.source.produce(&mut |item| {
            if seen.insert((self.key)(&item)) {
                accept(item)
            } else {
                true
            }
        })
    }
}

/// Extension trait providing the `distinct_by_key` operator.
pub trait DistinctByKeyExt: Sequence + Sized {
    /// Yields the first element for every distinct key.
    ///
    /// Only keys are stored, so elements need neither `Clone` nor `Eq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::from_vec;
    /// use tributary_stream::DistinctByKeyExt;
    /// use tributary_test_utils::collect;
    ///
    /// let words = from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let first_per_letter = words.distinct_by_key(|w| w.chars().next());
    ///
    /// assert_eq!(collect(&first_per_letter), vec!["apple", "banana", "cherry"]);
    /// ```
    fn distinct_by_key<K, F>(self, key: F) -> DistinctByKey<Self, F, K>
    where
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash;
}

impl<S: Sequence> DistinctByKeyExt for S {
    fn distinct_by_key<K, F>(self, key: F) -> DistinctByKey<Self, F, K>
    where
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash,
    {
        DistinctByKey {
            source: self,
            key,
            _key: PhantomData,
        }
    }
}
