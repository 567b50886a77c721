// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-while operator - yields items until a predicate first fails.

use tributary_core::Sequence;

/// Sequence returned by [`TakeWhileItemsExt::take_while_items`].
#[derive(Debug, Clone)]
pub struct TakeWhileItems<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Sequence for TakeWhileItems<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut stopped = false;
        self.source.produce(&mut |item| {
            if !(self.predicate)(&item) {
                return false;
            }
            if !accept(item) {
                stopped = true;
                return false;
            }
            true
        });
        !stopped
    }
}

/// Extension trait providing the `take_while_items` operator for sequences.
pub trait TakeWhileItemsExt: Sequence + Sized {
    /// Yields items while `predicate` holds and stops the source at the first
    /// item for which it does not. That item is not yielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::from_iter;
    /// use tributary_stream::TakeWhileItemsExt;
    /// use tributary_test_utils::collect;
    ///
    /// let small = from_iter(0..).take_while_items(|n| *n < 4);
    /// assert_eq!(collect(&small), vec![0, 1, 2, 3]);
    /// ```
    fn take_while_items<P>(self, predicate: P) -> TakeWhileItems<Self, P>
    where
        P: Fn(&Self::Item) -> bool;
}

impl<S: Sequence> TakeWhileItemsExt for S {
    fn take_while_items<P>(self, predicate: P) -> TakeWhileItems<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhileItems {
            source: self,
            predicate,
        }
    }
}
