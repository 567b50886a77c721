// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashMap;
use std::hash::Hash;
use tributary_core::Sequence;
use tributary_stream::WindowByCountExt;

/// Extension trait providing terminals that drain a sequence into a
/// collection or a callback.
///
/// Every method calls `produce` exactly once and never stops early.
pub trait CollectExt: Sequence + Sized {
    /// Collects every element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::from_vec;
    /// use tributary_exec::CollectExt;
    /// use tributary_stream::DistinctExt;
    ///
    /// let distinct = from_vec(vec![3, 1, 2, 3, 1]).distinct();
    /// assert_eq!(distinct.to_vec(), vec![3, 1, 2]);
    /// ```
    fn to_vec(&self) -> Vec<Self::Item> {
        let mut items = Vec::new();
        self.produce(&mut |item| {
            items.push(item);
            true
        });
        items
    }

    /// Builds a map from every element. A later element with the same key
    /// overwrites the value of an earlier one.
    fn to_map<K, V, KF, VF>(&self, key: KF, value: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: Fn(&Self::Item) -> K,
        VF: Fn(Self::Item) -> V,
    {
        let mut map = HashMap::new();
        self.produce(&mut |item| {
            map.insert(key(&item), value(item));
            true
        });
        map
    }

    /// Collects the elements into consecutive batches of `size`; the last
    /// batch may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    fn to_batches(&self, size: usize) -> Vec<Vec<Self::Item>> {
        self.window_by_count(size).to_vec()
    }

    /// Calls `f` on every element.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        self.produce(&mut |item| {
            f(item);
            true
        });
    }
}

impl<S: Sequence> CollectExt for S {}
