// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator - transforms every item.

use core::marker::PhantomData;
use tributary_core::Sequence;

/// Sequence returned by [`MapItemsExt::map_items`].
pub struct MapItems<S, F, U> {
    source: S,
    mapper: F,
    _output: PhantomData<fn() -> U>,
}

impl<S: Clone, F: Clone, U> Clone for MapItems<S, F, U> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            mapper: self.mapper.clone(),
            _output: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for MapItems<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn produce(&self, accept: &mut dyn FnMut(U) -> bool) -> bool {
        self.source.produce(&mut |item| accept((self.mapper)(item)))
    }
}

/// Extension trait providing the `map_items` operator for sequences.
pub trait MapItemsExt: Sequence + Sized {
    /// Applies `mapper` to every item, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::from_vec;
    /// use tributary_stream::MapItemsExt;
    /// use tributary_test_utils::collect;
    ///
    /// let lengths = from_vec(vec!["oak", "fern"]).map_items(str::len);
    /// assert_eq!(collect(&lengths), vec![3, 4]);
    /// ```
    fn map_items<U, F>(self, mapper: F) -> MapItems<Self, F, U>
    where
        F: Fn(Self::Item) -> U;
}

impl<S: Sequence> MapItemsExt for S {
    fn map_items<U, F>(self, mapper: F) -> MapItems<Self, F, U>
    where
        F: Fn(Self::Item) -> U,
    {
        MapItems {
            source: self,
            mapper,
            _output: PhantomData,
        }
    }
}
