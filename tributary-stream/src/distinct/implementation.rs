// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ahash::AHashSet;
use core::hash::Hash;
use tributary_core::Sequence;

/// Sequence returned by [`DistinctExt::distinct`].
#[derive(Debug, Clone)]
pub struct Distinct<S> {
    source: S,
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut seen = AHashSet::new();

        self.source.produce(&mut |item| {
            if seen.contains(&item) {
                return true;
            }
            seen.insert(item.clone());
            accept(item)
        })
    }
}

/// Extension trait providing the `distinct` operator for sequences whose
/// elements have native equality.
pub trait DistinctExt: Sequence + Sized
where
    Self::Item: Eq + Hash + Clone,
{
    /// Yields each element once, in order of first occurrence.
    ///
    /// See the [module-level documentation](crate::distinct) for details.
    fn distinct(self) -> Distinct<Self>;
}

impl<S> DistinctExt for S
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    fn distinct(self) -> Distinct<Self> {
        Distinct { source: self }
    }
}
