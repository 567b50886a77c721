// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::descriptor::{OrderedSequence, SortLevel};
use core::cmp::Ordering;
use tributary_core::Sequence;

/// Compares `a` with `b` level by level; the first non-equal level decides.
///
/// Returns `Ordering::Equal` when every level ties, which the stable sort
/// turns into "keep the original order".
pub(super) fn compare_levels<T>(levels: &[SortLevel<T>], a: &T, b: &T) -> Ordering {
    levels
        .iter()
        .map(|level| level.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl<S: Sequence> OrderedSequence<S> {
    /// Materializes the source and sorts it with all levels.
    fn execute(&self) -> Vec<S::Item> {
        let mut buffer = Vec::new();
        self.source.produce(&mut |item| {
            buffer.push(item);
            true
        });

        if buffer.len() > 1 {
            trace!(
                "order_by: sorting {} elements on {} levels",
                buffer.len(),
                self.levels.len()
            );
            // slice::sort_by is stable: full ties keep buffer order
            buffer.sort_by(|a, b| compare_levels(&self.levels, a, b));
        }
        buffer
    }
}

impl<S: Sequence> Sequence for OrderedSequence<S> {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        self.execute().into_iter().all(accept)
    }
}
