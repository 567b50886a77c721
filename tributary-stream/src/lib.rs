// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy operators over push-style sequences.
//!
//! Every operator wraps a [`Sequence`](tributary_core::Sequence) in a new
//! sequence and does no work until the result is consumed. Operators are
//! provided through extension traits, one per operator, implemented for every
//! sequence.
//!
//! # Operator Categories
//!
//! ### Deduplication
//!
//! - **[`distinct`](DistinctExt::distinct)**: First occurrence of each element, native equality
//! - **[`distinct_by`](DistinctByExt::distinct_by)**: Same, with a caller-supplied [`Equivalence`](tributary_core::Equivalence)
//! - **[`distinct_by_key`](DistinctByKeyExt::distinct_by_key)**: First element per derived key
//!
//! ### Ordering
//!
//! - **[`order_by`](OrderByExt::order_by)** and variants: Deferred, stable, multi-level sort
//! - **[`then_by`](OrderedSequence::then_by)** and variants: Append a tiebreak level
//!
//! ### Filtering and Transformation
//!
//! - **[`filter_items`](FilterItemsExt::filter_items)**: Keep matching items
//! - **[`map_items`](MapItemsExt::map_items)**: Transform each item
//! - **[`take_items`](TakeItemsExt::take_items)** / **[`skip_items`](SkipItemsExt::skip_items)**: Limit by count
//! - **[`take_while_items`](TakeWhileItemsExt::take_while_items)** / **[`skip_while_items`](SkipWhileItemsExt::skip_while_items)**: Limit by predicate
//! - **[`window_by_count`](WindowByCountExt::window_by_count)**: Batch into fixed-size vectors
//!
//! # Early Termination
//!
//! A consumer stops an enumeration by returning `false` from its callback.
//! Every operator forwards that signal upstream immediately, so
//! `naturals.filter_items(..).distinct().take_items(3)` touches only as many
//! source elements as needed. The sort operators are the exception: they
//! must see their whole input before the first element comes out.
//!
//! ```rust
//! use tributary_core::from_iter;
//! use tributary_stream::{DistinctExt, MapItemsExt, TakeItemsExt};
//! use tributary_test_utils::collect;
//!
//! // Unbounded source, bounded result
//! let residues = from_iter(0u32..).map_items(|n| n % 5).distinct().take_items(5);
//! assert_eq!(collect(&residues), vec![0, 1, 2, 3, 4]);
//! ```
//!
//! # Absent Sources
//!
//! `Option<S>` is a sequence and `None` behaves like an empty one, so an
//! operator chain over a missing source simply yields nothing:
//!
//! ```rust
//! use tributary_core::FromVec;
//! use tributary_stream::{DistinctExt, OrderByExt};
//! use tributary_test_utils::collect;
//!
//! let absent: Option<FromVec<i32>> = None;
//! let chain = absent.order_by_key(|n| *n).then_by_key(|n| -n).distinct();
//! assert!(collect(&chain).is_empty());
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;

pub mod distinct;
pub mod filter_items;
pub mod map_items;
pub mod order_by;
pub mod skip_items;
pub mod skip_while_items;
pub mod take_items;
pub mod take_while_items;
pub mod window_by_count;

pub use distinct::{
    Distinct, DistinctBy, DistinctByExt, DistinctByKey, DistinctByKeyExt, DistinctExt,
};
pub use filter_items::{FilterItems, FilterItemsExt};
pub use map_items::{MapItems, MapItemsExt};
pub use order_by::{OrderByExt, OrderedSequence, SortDirection, SortLevel};
pub use skip_items::{SkipItems, SkipItemsExt};
pub use skip_while_items::{SkipWhileItems, SkipWhileItemsExt};
pub use take_items::{TakeItems, TakeItemsExt};
pub use take_while_items::{TakeWhileItems, TakeWhileItemsExt};
pub use window_by_count::{WindowByCount, WindowByCountExt};
