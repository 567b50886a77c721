// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Window-by-count operator for batching items.
//!
//! Groups consecutive items into vectors of `n`. When the source is exhausted,
//! the trailing partial window is yielded as well. If the consumer stops, the
//! partial window is dropped.
//!
//! # Panics
//!
//! Panics if `n` is 0.
//!
//! # Examples
//!
//! ```rust
//! use tributary_core::range;
//! use tributary_stream::WindowByCountExt;
//! use tributary_test_utils::collect;
//!
//! let windows = range(1, 6).window_by_count(4);
//!
//! assert_eq!(collect(&windows), vec![vec![1, 2, 3, 4], vec![5, 6]]);
//! ```

use core::mem;
use tributary_core::Sequence;

/// Sequence returned by [`WindowByCountExt::window_by_count`].
#[derive(Debug, Clone)]
pub struct WindowByCount<S> {
    source: S,
    n: usize,
}

impl<S: Sequence> Sequence for WindowByCount<S> {
    type Item = Vec<S::Item>;

    fn produce(&self, accept: &mut dyn FnMut(Vec<S::Item>) -> bool) -> bool {
        let mut buffer = Vec::with_capacity(self.n);

        let completed = self.source.produce(&mut |item| {
            buffer.push(item);
            if buffer.len() < self.n {
                return true;
            }
            accept(mem::replace(&mut buffer, Vec::with_capacity(self.n)))
        });

        if !completed {
            return false;
        }
        buffer.is_empty() || accept(buffer)
    }
}

/// Extension trait providing the `window_by_count` operator for sequences.
pub trait WindowByCountExt: Sequence + Sized {
    /// Groups consecutive items into windows of `n`.
    ///
    /// See the [module-level documentation](crate::window_by_count) for details.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    fn window_by_count(self, n: usize) -> WindowByCount<Self>;
}

impl<S: Sequence> WindowByCountExt for S {
    fn window_by_count(self, n: usize) -> WindowByCount<Self> {
        assert!(n >= 1, "window_by_count: window size must be at least 1");
        WindowByCount { source: self, n }
    }
}
