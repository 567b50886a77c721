// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ahash::AHashMap;
use tributary_core::{Equivalence, Sequence, SequenceError};

/// Sequence returned by [`DistinctByExt::distinct_by`].
///
/// Seen elements are kept in buckets keyed by the contract's hash. An element
/// is a duplicate when `equals` holds against any entry of its bucket, so the
/// hash only narrows the search.
#[derive(Debug, Clone)]
pub struct DistinctBy<S, E> {
    source: S,
    contract: E,
}

impl<S, E> Sequence for DistinctBy<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: Equivalence<S::Item>,
{
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut buckets: AHashMap<u64, Vec<S::Item>> = AHashMap::new();

        self.source.produce(&mut |item| {
            let bucket = buckets.entry(self.contract.hash(&item)).or_default();
            if bucket.iter().any(|seen| self.contract.equals(seen, &item)) {
                return true;
            }
            bucket.push(item.clone());
            accept(item)
        })
    }
}

/// Extension trait providing deduplication through a caller-supplied
/// [`Equivalence`], for element types without native `Eq + Hash`.
pub trait DistinctByExt: Sequence + Sized
where
    Self::Item: Clone,
{
    /// Yields each element once, in order of first occurrence, deciding
    /// equality with `contract`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::{equivalence, from_vec};
    /// use tributary_stream::DistinctByExt;
    /// use tributary_test_utils::collect;
    ///
    /// // f64 has no Eq/Hash, compare bit patterns instead
    /// let readings = from_vec(vec![1.5_f64, 2.0, 1.5, 3.25, 2.0]);
    /// let contract = equivalence(
    ///     |a: &f64, b: &f64| a.to_bits() == b.to_bits(),
    ///     |v: &f64| v.to_bits(),
    /// );
    ///
    /// assert_eq!(collect(&readings.distinct_by(contract)), vec![1.5, 2.0, 3.25]);
    /// ```
    fn distinct_by<E>(self, contract: E) -> DistinctBy<Self, E>
    where
        E: Equivalence<Self::Item>;

    /// Same as [`distinct_by`](DistinctByExt::distinct_by) for callers that
    /// hold the contract as an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `contract` is `None`. A missing equality contract is a
    /// programming error; guessing a fallback equality would silently give
    /// wrong results.
    fn distinct_with<E>(self, contract: Option<E>) -> DistinctBy<Self, E>
    where
        E: Equivalence<Self::Item>;
}

impl<S> DistinctByExt for S
where
    S: Sequence,
    S::Item: Clone,
{
    fn distinct_by<E>(self, contract: E) -> DistinctBy<Self, E>
    where
        E: Equivalence<Self::Item>,
    {
        DistinctBy {
            source: self,
            contract,
        }
    }

    fn distinct_with<E>(self, contract: Option<E>) -> DistinctBy<Self, E>
    where
        E: Equivalence<Self::Item>,
    {
        match contract {
            Some(contract) => self.distinct_by(contract),
            None => panic!(
                "{}",
                SequenceError::contract_violation("distinct_with requires an equality contract")
            ),
        }
    }
}
