// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator - yields only the items matching a predicate.

use tributary_core::Sequence;

/// Sequence returned by [`FilterItemsExt::filter_items`].
#[derive(Debug, Clone)]
pub struct FilterItems<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Sequence for FilterItems<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        self.source.produce(&mut |item| {
            if (self.predicate)(&item) {
                accept(item)
            } else {
                true
            }
        })
    }
}

/// Extension trait providing the `filter_items` operator for sequences.
pub trait FilterItemsExt: Sequence + Sized {
    /// Yields the items for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::range;
    /// use tributary_stream::FilterItemsExt;
    /// use tributary_test_utils::collect;
    ///
    /// let even = range(1, 6).filter_items(|n| n % 2 == 0);
    /// assert_eq!(collect(&even), vec![2, 4, 6]);
    /// ```
    fn filter_items<P>(self, predicate: P) -> FilterItems<Self, P>
    where
        P: Fn(&Self::Item) -> bool;
}

impl<S: Sequence> FilterItemsExt for S {
    fn filter_items<P>(self, predicate: P) -> FilterItems<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        FilterItems {
            source: self,
            predicate,
        }
    }
}
