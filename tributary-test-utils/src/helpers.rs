// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::record::Record;
use std::ops::RangeFrom;
use tributary_core::{from_iter, FromIter, Sequence};

/// Drains `sequence` into a vector.
pub fn collect<S: Sequence>(sequence: &S) -> Vec<S::Item> {
    let mut items = Vec::new();
    sequence.produce(&mut |item| {
        items.push(item);
        true
    });
    items
}

/// Collects at most `limit` items, stopping the producer afterwards.
pub fn collect_first<S: Sequence>(sequence: &S, limit: usize) -> Vec<S::Item> {
    let mut items = Vec::new();
    if limit == 0 {
        return items;
    }
    sequence.produce(&mut |item| {
        items.push(item);
        items.len() < limit
    });
    items
}

/// Asserts that `sequence` produces exactly `expected`, in order.
pub fn assert_produces<S>(sequence: &S, expected: &[S::Item])
where
    S: Sequence,
    S::Item: PartialEq + std::fmt::Debug,
{
    assert_eq!(collect(sequence), expected);
}

/// Asserts that `sequence` produces nothing and reports completion.
pub fn assert_produces_nothing<S: Sequence>(sequence: &S) {
    let mut calls = 0usize;
    let completed = sequence.produce(&mut |_| {
        calls += 1;
        true
    });
    assert_eq!(calls, 0, "Unexpected element produced, expected no output.");
    assert!(completed, "An empty sequence must report completion.");
}

/// The unbounded sequence `0, 1, 2, ...`.
#[must_use]
pub fn naturals() -> FromIter<RangeFrom<i64>> {
    from_iter(0i64..)
}

/// Records in the order used by the category/value sort examples.
#[must_use]
pub fn category_records() -> Vec<Record> {
    vec![
        Record::new("B", 10),
        Record::new("A", 20),
        Record::new("A", 15),
    ]
}
