// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deduplication operators.
//!
//! Every operator in this module yields each element once, in order of first
//! occurrence. They differ only in how "the same element" is decided:
//!
//! | Operator | Element bound | Seen-set |
//! |----------|---------------|----------|
//! | [`distinct`](DistinctExt::distinct) | `Eq + Hash + Clone` | set of elements |
//! | [`distinct_by`](DistinctByExt::distinct_by) | `Clone` + an [`Equivalence`](tributary_core::Equivalence) | hash buckets confirmed with `equals` |
//! | [`distinct_by_key`](DistinctByKeyExt::distinct_by_key) | key is `Eq + Hash` | set of keys |
//!
//! # Behavior
//!
//! - Duplicates are skipped; they never stop the enumeration
//! - The seen-set lives for a single `produce` call and is discarded afterwards
//! - A consumer that stops early stops the upstream too; the remainder is never
//!   materialized
//! - An absent or empty source yields nothing
//!
//! # Examples
//!
//! ```rust
//! use tributary_core::from_vec;
//! use tributary_stream::DistinctExt;
//! use tributary_test_utils::collect;
//!
//! let distinct = from_vec(vec![3, 1, 2, 3, 1]).distinct();
//! assert_eq!(collect(&distinct), vec![3, 1, 2]);
//! ```
//!
//! # Performance
//!
//! - O(n) amortized time, O(k) space for k distinct elements
//! - No eviction: the seen-set grows with the number of distinct elements
//! - `distinct_by` degrades towards O(n²) when many elements share a hash

mod distinct_by;
mod distinct_by_key;
mod implementation;

pub use distinct_by::{DistinctBy, DistinctByExt};
pub use distinct_by_key::{DistinctByKey, DistinctByKeyExt};
pub use implementation::{Distinct, DistinctExt};
