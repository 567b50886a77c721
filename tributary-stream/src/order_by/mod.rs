// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred multi-level stable sorting.
//!
//! [`order_by`](OrderByExt::order_by) does not sort anything. It returns an
//! [`OrderedSequence`]: the source plus a list of sort levels. Secondary keys
//! are appended with [`then_by`](OrderedSequence::then_by) and friends, much
//! like the columns of an `ORDER BY` clause. The sort runs when the
//! descriptor is consumed.
//!
//! # Behavior
//!
//! - Each consumption materializes the whole source, sorts it once with a
//!   combined comparator, then yields the buffer in order
//! - Levels are evaluated in priority order; the first non-equal level
//!   decides, negated for descending levels
//! - The sort is stable: elements tied on every level keep their source
//!   order, for ascending and descending levels alike
//! - Stopping early stops the yield, but the sort itself has already run
//! - Absent or empty sources yield nothing
//! - Panics from comparators propagate to the consumer
//!
//! # Composition
//!
//! [`OrderedSequence`] implements [`Sequence`](tributary_core::Sequence), so
//! any other operator can follow it. Chaining `take_items`, `distinct` and
//! the like forces the sort on consumption, exactly as if they were applied
//! to the sorted output.
//!
//! # Examples
//!
//! ```rust
//! use tributary_core::from_vec;
//! use tributary_stream::{OrderByExt, TakeItemsExt};
//! use tributary_test_utils::test_data::{person_alice, person_bob, person_charlie, TestData};
//! use tributary_test_utils::collect;
//!
//! let people = from_vec(vec![person_bob(), person_charlie(), person_alice()]);
//!
//! let last_two_by_name = people
//!     .order_by_key_descending(|p: &TestData| p.name().to_string())
//!     .take_items(2);
//!
//! assert_eq!(collect(&last_two_by_name), vec![person_charlie(), person_bob()]);
//! ```
//!
//! # Performance
//!
//! - O(n log n) comparisons and O(n) buffer per consumption
//! - No caching: repeated consumption re-sorts, which also picks up changes
//!   in sources that are re-read on every `produce`

mod descriptor;
mod execution;

pub use descriptor::{OrderedSequence, SortDirection, SortLevel};

use tributary_core::{by_key, Comparator, Sequence};

/// Extension trait starting a deferred sort on any sequence.
pub trait OrderByExt: Sequence + Sized {
    /// Sorts ascending by `comparator`.
    ///
    /// Closures need annotated parameter types, for example
    /// `|a: &Record, b: &Record| a.value.cmp(&b.value)`.
    fn order_by<C>(self, comparator: C) -> OrderedSequence<Self>
    where
        C: Comparator<Self::Item> + Send + Sync + 'static;

    /// Sorts descending by `comparator`.
    fn order_by_descending<C>(self, comparator: C) -> OrderedSequence<Self>
    where
        C: Comparator<Self::Item> + Send + Sync + 'static;

    /// Sorts ascending by a derived key.
    fn order_by_key<K, F>(self, key: F) -> OrderedSequence<Self>
    where
        K: Ord + 'static,
        F: Fn(&Self::Item) -> K + Send + Sync + 'static;

    /// Sorts descending by a derived key.
    fn order_by_key_descending<K, F>(self, key: F) -> OrderedSequence<Self>
    where
        K: Ord + 'static,
        F: Fn(&Self::Item) -> K + Send + Sync + 'static;
}

impl<S: Sequence> OrderByExt for S {
    fn order_by<C>(self, comparator: C) -> OrderedSequence<Self>
    where
        C: Comparator<Self::Item> + Send + Sync + 'static,
    {
        OrderedSequence::new(self, SortLevel::new(comparator, SortDirection::Ascending))
    }

    fn order_by_descending<C>(self, comparator: C) -> OrderedSequence<Self>
    where
        C: Comparator<Self::Item> + Send + Sync + 'static,
    {
        OrderedSequence::new(self, SortLevel::new(comparator, SortDirection::Descending))
    }

    fn order_by_key<K, F>(self, key: F) -> OrderedSequence<Self>
    where
        K: Ord + 'static,
        F: Fn(&Self::Item) -> K + Send + Sync + 'static,
    {
        self.order_by(by_key(key))
    }

    fn order_by_key_descending<K, F>(self, key: F) -> OrderedSequence<Self>
    where
        K: Ord + 'static,
        F: Fn(&Self::Item) -> K + Send + Sync + 'static,
    {
        self.order_by_descending(by_key(key))
    }
}
