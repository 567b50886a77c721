// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The push-style iteration protocol every operator is built on.

use std::sync::Arc;

/// A lazy producer of elements consumed through an acceptance callback.
///
/// A `Sequence` is not a stored collection: it is a recipe that pushes its
/// elements, one at a time and in order, into a consumer-supplied `accept`
/// function. The consumer stops the enumeration by returning `false`.
///
/// # Contract
///
/// - `accept` is invoked with elements strictly in produce-order.
/// - Once `accept` returns `false`, `produce` must not invoke it again and
///   must return promptly, with no further side effects.
/// - A sequence with nothing to yield invokes `accept` zero times. Emptiness is
///   never an error.
/// - `produce` returns `true` when the producer ran to exhaustion and `false`
///   when the consumer stopped it. Operators built on an upstream sequence
///   forward this value so the stop signal reaches their own caller.
///
/// Invoking `produce` again replays the source from the beginning, unless the
/// source itself is single-use (for example a channel receiver).
///
/// # Absent sequences
///
/// `Option<S>` is a sequence: `None` stands for an absent upstream and behaves
/// exactly like a sequence that produces nothing. Every operator therefore
/// accepts an absent source without special handling.
///
/// # Examples
///
/// ```rust
/// use tributary_core::{from_vec, Sequence};
///
/// let numbers = from_vec(vec![1, 2, 3, 4]);
///
/// let mut seen = Vec::new();
/// let completed = numbers.produce(&mut |n| {
///     seen.push(n);
///     n < 2
/// });
///
/// assert_eq!(seen, vec![1, 2]);
/// assert!(!completed);
/// ```
pub trait Sequence {
    /// The type of the elements pushed to the consumer.
    type Item;

    /// Pushes each element to `accept` until the source is exhausted or
    /// `accept` returns `false`.
    ///
    /// Returns `false` if and only if the consumer stopped the enumeration.
    fn produce(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool;
}

/// A type-erased sequence.
pub type BoxSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;

/// A type-erased sequence that can cross thread boundaries.
pub type SendBoxSequence<'a, T> = Box<dyn Sequence<Item = T> + Send + Sync + 'a>;

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).produce(accept)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).produce(accept)
    }
}

impl<S: Sequence + ?Sized> Sequence for Arc<S> {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).produce(accept)
    }
}

impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    fn produce(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        match self {
            Some(source) => source.produce(accept),
            None => true,
        }
    }
}

/// Conversion helpers available on every sequence.
pub trait SequenceExt: Sequence + Sized {
    /// Erases the concrete type of this sequence.
    fn boxed<'a>(self) -> BoxSequence<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Erases the concrete type of this sequence, keeping it `Send + Sync`.
    fn boxed_send<'a>(self) -> SendBoxSequence<'a, Self::Item>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }

    /// Borrows this sequence so an operator chain can be built without
    /// consuming it.
    fn by_ref(&self) -> &Self {
        self
    }
}

impl<S: Sequence> SequenceExt for S {}
