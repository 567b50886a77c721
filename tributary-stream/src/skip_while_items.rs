// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip-while operator - discards a leading run of items matching a predicate.

use tributary_core::Sequence;

/// Sequence returned by [`SkipWhileItemsExt::skip_while_items`].
#[derive(Debug, Clone)]
pub struct SkipWhileItems<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Sequence for SkipWhileItems<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut skipping = true;
        self.source.produce(&mut |item| {
            if skipping {
                if (self.predicate)(&item) {
                    return true;
                }
                skipping = false;
            }
            accept(item)
        })
    }
}

/// Extension trait providing the `skip_while_items` operator for sequences.
pub trait SkipWhileItemsExt: Sequence + Sized {
    /// Discards items while `predicate` holds, then yields everything from the
    /// first non-matching item on. The predicate is not consulted again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::from_vec;
    /// use tributary_stream::SkipWhileItemsExt;
    /// use tributary_test_utils::collect;
    ///
    /// let rest = from_vec(vec![1, 2, 5, 1, 7]).skip_while_items(|n| *n < 3);
    /// assert_eq!(collect(&rest), vec![5, 1, 7]);
    /// ```
    fn skip_while_items<P>(self, predicate: P) -> SkipWhileItems<Self, P>
    where
        P: Fn(&Self::Item) -> bool;
}

impl<S: Sequence> SkipWhileItemsExt for S {
    fn skip_while_items<P>(self, predicate: P) -> SkipWhileItems<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhileItems {
            source: self,
            predicate,
        }
    }
}
