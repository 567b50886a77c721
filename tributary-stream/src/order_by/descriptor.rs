// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;
use tributary_core::{by_key, Comparator, Sequence};

/// Direction of a single sort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// Orients a comparator result according to this direction.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// One `(comparator, direction)` pair of a sort descriptor.
pub struct SortLevel<T> {
    comparator: Arc<dyn Comparator<T> + Send + Sync>,
    direction: SortDirection,
}

impl<T> SortLevel<T> {
    /// Creates a level from a comparator and a direction.
    pub fn new<C>(comparator: C, direction: SortDirection) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        Self {
            comparator: Arc::new(comparator),
            direction,
        }
    }

    /// The direction of this level.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compares `a` with `b` on this level, direction applied.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply(self.comparator.compare(a, b))
    }
}

impl<T> Clone for SortLevel<T> {
    fn clone(&self) -> Self {
        Self {
            comparator: Arc::clone(&self.comparator),
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for SortLevel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortLevel")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// A deferred, multi-level sort over a source sequence.
///
/// Created by [`OrderByExt`](crate::OrderByExt), extended with the `then_by*`
/// methods. Nothing is evaluated until the descriptor is consumed as a
/// [`Sequence`]: each `produce` call materializes the source, sorts it once
/// with all levels and yields the result.
///
/// # Invariants
///
/// - Levels are append-only. Level 1 is the primary key, the last level is
///   the most specific tiebreak.
/// - `then_by*` never touches `self`; it returns a new descriptor sharing the
///   same source and an extended copy of the level list.
/// - Results are never cached: consuming the same descriptor twice sorts twice.
pub struct OrderedSequence<S: Sequence> {
    pub(super) source: Arc<S>,
    pub(super) levels: Vec<SortLevel<S::Item>>,
}

impl<S: Sequence> OrderedSequence<S> {
    pub(super) fn new(source: S, level: SortLevel<S::Item>) -> Self {
        Self {
            source: Arc::new(source),
            levels: vec![level],
        }
    }

    /// The accumulated levels, primary first.
    #[must_use]
    pub fn levels(&self) -> &[SortLevel<S::Item>] {
        &self.levels
    }

    /// Returns a new descriptor with `level` appended as the lowest priority.
    #[must_use]
    pub fn with_level(&self, level: SortLevel<S::Item>) -> Self {
        let mut levels = Vec::with_capacity(self.levels.len() + 1);
        levels.extend(self.levels.iter().cloned());
        levels.push(level);

        Self {
            source: Arc::clone(&self.source),
            levels,
        }
    }

    /// Breaks ties of the existing levels with `comparator`, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::from_vec;
    /// use tributary_stream::OrderByExt;
    /// use tributary_test_utils::{collect, Record};
    ///
    /// let records = from_vec(vec![
    ///     Record::new("B", 10),
    ///     Record::new("A", 20),
    ///     Record::new("A", 15),
    /// ]);
    ///
    /// let by_category = records.order_by_key(|r| r.category.clone());
    /// let by_category_then_value =
    ///     by_category.then_by(|a: &Record, b: &Record| a.value.cmp(&b.value));
    ///
    /// assert_eq!(
    ///     collect(&by_category_then_value),
    ///     vec![Record::new("A", 15), Record::new("A", 20), Record::new("B", 10)]
    /// );
    /// // The primary-only descriptor is still usable on its own
    /// assert_eq!(by_category.levels().len(), 1);
    /// ```
    #[must_use]
    pub fn then_by<C>(&self, comparator: C) -> Self
    where
        C: Comparator<S::Item> + Send + Sync + 'static,
    {
        self.with_level(SortLevel::new(comparator, SortDirection::Ascending))
    }

    /// Breaks ties of the existing levels with `comparator`, descending.
    #[must_use]
    pub fn then_by_descending<C>(&self, comparator: C) -> Self
    where
        C: Comparator<S::Item> + Send + Sync + 'static,
    {
        self.with_level(SortLevel::new(comparator, SortDirection::Descending))
    }

    /// Breaks ties of the existing levels by a derived key, ascending.
    #[must_use]
    pub fn then_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&S::Item) -> K + Send + Sync + 'static,
    {
        self.then_by(by_key(key))
    }

    /// Breaks ties of the existing levels by a derived key, descending.
    #[must_use]
    pub fn then_by_key_descending<K, F>(&self, key: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&S::Item) -> K + Send + Sync + 'static,
    {
        self.then_by_descending(by_key(key))
    }
}

impl<S: Sequence> Clone for OrderedSequence<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            levels: self.levels.clone(),
        }
    }
}

impl<S: Sequence + fmt::Debug> fmt::Debug for OrderedSequence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSequence")
            .field("source", &self.source)
            .field("levels", &self.levels)
            .finish()
    }
}
