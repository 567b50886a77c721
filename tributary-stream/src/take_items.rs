// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-items operator - limits a sequence to its first n items.
//!
//! # Arguments
//!
//! * `n` - The maximum number of items to yield.
//!
//! # Returns
//!
//! A new sequence that yields at most `n` items from the source and then stops
//! the source. `take_items(0)` never invokes the source at all.
//!
//! This is the operator that makes unbounded sources usable: the source does no
//! more than the work needed for `n` items, unless a sort sits in between,
//! which always materializes its whole input first.
//!
//! # Examples
//!
//! ```rust
//! use tributary_core::from_iter;
//! use tributary_stream::TakeItemsExt;
//! use tributary_test_utils::collect;
//!
//! let first_three = from_iter(1..).take_items(3);
//!
//! assert_eq!(collect(&first_three), vec![1, 2, 3]);
//! ```
//!
//! # See Also
//!
//! - [`SkipItemsExt::skip_items`](crate::SkipItemsExt::skip_items) - Skip first n items
//! - [`TakeWhileItemsExt::take_while_items`](crate::TakeWhileItemsExt::take_while_items) - Take while a predicate holds

use tributary_core::Sequence;

/// Sequence returned by [`TakeItemsExt::take_items`].
#[derive(Debug, Clone)]
pub struct TakeItems<S> {
    source: S,
    n: usize,
}

impl<S: Sequence> Sequence for TakeItems<S> {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        if self.n == 0 {
            return true;
        }

        let mut remaining = self.n;
        let mut stopped = false;
        self.source.produce(&mut |item| {
            if stopped || remaining == 0 {
                return false;
            }
            remaining -= 1;
            if !accept(item) {
                stopped = true;
                return false;
            }
            remaining > 0
        });
        !stopped
    }
}

/// Extension trait providing the `take_items` operator for sequences.
pub trait TakeItemsExt: Sequence + Sized {
    /// Yields only the first `n` items, then stops the source.
    ///
    /// See the [module-level documentation](crate::take_items) for details.
    fn take_items(self, n: usize) -> TakeItems<Self>;
}

impl<S: Sequence> TakeItemsExt for S {
    fn take_items(self, n: usize) -> TakeItems<Self> {
        TakeItems { source: self, n }
    }
}
