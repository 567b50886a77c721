// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip-items operator - discards the first n items of a sequence.
//!
//! If the source has fewer than `n` items, nothing is yielded.
//!
//! # Examples
//!
//! ```rust
//! use tributary_core::from_vec;
//! use tributary_stream::SkipItemsExt;
//! use tributary_test_utils::collect;
//!
//! let after_first_two = from_vec(vec![1, 2, 3, 4]).skip_items(2);
//!
//! assert_eq!(collect(&after_first_two), vec![3, 4]);
//! ```

use tributary_core::Sequence;

/// Sequence returned by [`SkipItemsExt::skip_items`].
#[derive(Debug, Clone)]
pub struct SkipItems<S> {
    source: S,
    n: usize,
}

impl<S: Sequence> Sequence for SkipItems<S> {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let mut to_skip = self.n;
        self.source.produce(&mut |item| {
            if to_skip > 0 {
                to_skip -= 1;
                return true;
            }
            accept(item)
        })
    }
}

/// Extension trait providing the `skip_items` operator for sequences.
pub trait SkipItemsExt: Sequence + Sized {
    /// Discards the first `n` items and yields the rest.
    fn skip_items(self, n: usize) -> SkipItems<Self>;
}

impl<S: Sequence> SkipItemsExt for S {
    fn skip_items(self, n: usize) -> SkipItems<Self> {
        SkipItems { source: self, n }
    }
}
