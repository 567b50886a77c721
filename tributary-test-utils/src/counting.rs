// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented source used to assert how much upstream work an operator
//! chain performs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tributary_core::Sequence;

/// Wraps a sequence and counts the elements it pushes and the number of
/// `produce` calls it receives.
///
/// Counters are shared between clones, so a clone can be moved into an
/// operator chain while the original is kept for assertions.
#[derive(Debug, Clone)]
pub struct CountingSequence<S> {
    source: S,
    produced: Arc<AtomicUsize>,
    invocations: Arc<AtomicUsize>,
}

impl<S> CountingSequence<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            produced: Arc::new(AtomicUsize::new(0)),
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Total number of elements pushed downstream so far.
    #[must_use]
    pub fn produced(&self) -> usize {
        self.produced.load(Ordering::SeqCst)
    }

    /// Number of times `produce` has been called.
    #[must_use]
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl<S: Sequence> Sequence for CountingSequence<S> {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(S::Item) -> bool) -> bool {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.source.produce(&mut |item| {
            self.produced.fetch_add(1, Ordering::SeqCst);
            accept(item)
        })
    }
}
