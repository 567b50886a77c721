// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use tributary_core::{natural, Comparator, Sequence};

/// Running extremum: an element replaces the current one only when it
/// compares strictly `wanted` against it, so the first of equals wins.
fn extremum<S, C>(sequence: &S, comparator: C, wanted: Ordering) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item>,
{
    let mut best: Option<S::Item> = None;
    sequence.produce(&mut |item| {
        let replace = best
            .as_ref()
            .map_or(true, |current| comparator.compare(&item, current) == wanted);
        if replace {
            best = Some(item);
        }
        true
    });
    best
}

fn last_matching<S, P>(sequence: &S, predicate: P) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let mut last = None;
    sequence.produce(&mut |item| {
        if predicate(&item) {
            last = Some(item);
        }
        true
    });
    last
}

fn first_matching<S, P>(sequence: &S, predicate: P) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let mut first = None;
    sequence.produce(&mut |item| {
        if predicate(&item) {
            first = Some(item);
            return false;
        }
        true
    });
    first
}

/// Extension trait providing single-value terminals.
///
/// Empty and absent sequences yield `0` or `None`. Only the `first*`
/// methods stop the producer early; the others read every element.
pub trait AggregateExt: Sequence + Sized {
    /// Number of elements.
    fn count(&self) -> usize {
        self.count_where(|_| true)
    }

    /// Number of elements matching `predicate`.
    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut count = 0;
        self.produce(&mut |item| {
            if predicate(&item) {
                count += 1;
            }
            true
        });
        count
    }

    /// The first element. Stops the producer after it.
    fn first(&self) -> Option<Self::Item> {
        first_matching(self, |_| true)
    }

    /// The first element matching `predicate`. Stops the producer after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::from_iter;
    /// use tributary_exec::AggregateExt;
    ///
    /// // Terminates on an unbounded source
    /// let naturals = from_iter(0u64..);
    /// assert_eq!(naturals.first_where(|n| n * n > 50), Some(8));
    /// ```
    fn first_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        first_matching(self, predicate)
    }

    /// The last element.
    fn last(&self) -> Option<Self::Item> {
        last_matching(self, |_| true)
    }

    /// The last element matching `predicate`.
    fn last_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        last_matching(self, predicate)
    }

    /// The smallest element; the first one among equals.
    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        extremum(self, natural(), Ordering::Less)
    }

    /// The largest element; the first one among equals.
    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        extremum(self, natural(), Ordering::Greater)
    }

    /// The smallest element according to `comparator`; the first one among
    /// equals.
    fn min_by<C>(&self, comparator: C) -> Option<Self::Item>
    where
        C: Comparator<Self::Item>,
    {
        extremum(self, comparator, Ordering::Less)
    }

    /// The largest element according to `comparator`; the first one among
    /// equals.
    fn max_by<C>(&self, comparator: C) -> Option<Self::Item>
    where
        C: Comparator<Self::Item>,
    {
        extremum(self, comparator, Ordering::Greater)
    }
}

impl<S: Sequence> AggregateExt for S {}
