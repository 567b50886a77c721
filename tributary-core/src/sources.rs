// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source adapters that turn plain data into replayable sequences.

use crate::Sequence;
use core::marker::PhantomData;

/// A sequence that produces nothing.
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn produce(&self, _accept: &mut dyn FnMut(T) -> bool) -> bool {
        true
    }
}

/// Creates a sequence with no elements.
#[must_use]
pub const fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// A replayable sequence over an owned vector, yielding clones of its
/// elements.
#[derive(Debug, Clone)]
pub struct FromVec<T> {
    items: Vec<T>,
}

impl<T: Clone> Sequence for FromVec<T> {
    type Item = T;

    fn produce(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        self.items.iter().all(|item| accept(item.clone()))
    }
}

/// Creates a replayable sequence that owns `items`.
///
/// # Examples
///
/// ```rust
/// use tributary_core::{from_vec, Sequence};
///
/// let letters = from_vec(vec!['a', 'b']);
///
/// let mut out = String::new();
/// letters.produce(&mut |c| {
///     out.push(c);
///     true
/// });
/// letters.produce(&mut |c| {
///     out.push(c);
///     true
/// });
/// assert_eq!(out, "abab");
/// ```
#[must_use]
pub const fn from_vec<T>(items: Vec<T>) -> FromVec<T> {
    FromVec { items }
}

/// A replayable sequence borrowing a slice.
#[derive(Debug)]
pub struct FromSlice<'a, T> {
    items: &'a [T],
}

impl<T> Clone for FromSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FromSlice<'_, T> {}

impl<T: Clone> Sequence for FromSlice<'_, T> {
    type Item = T;

    fn produce(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        self.items.iter().all(|item| accept(item.clone()))
    }
}

/// Creates a replayable sequence over a borrowed slice.
#[must_use]
pub const fn from_slice<T>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice { items }
}

/// A sequence replaying a cloneable iterator.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn produce(&self, accept: &mut dyn FnMut(I::Item) -> bool) -> bool {
        self.iter.clone().all(accept)
    }
}

/// Creates a sequence from anything whose iterator can be cloned.
///
/// Each `produce` call clones the iterator, so the sequence replays from the
/// start. Unbounded iterators are fine as long as the consumer stops.
///
/// # Examples
///
/// ```rust
/// use tributary_core::{from_iter, Sequence};
///
/// let naturals = from_iter(0u64..);
///
/// let mut sum = 0;
/// naturals.produce(&mut |n| {
///     sum += n;
///     n < 4
/// });
/// assert_eq!(sum, 10);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    FromIter {
        iter: iter.into_iter(),
    }
}

/// A sequence of consecutive integers.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    start: i64,
    count: usize,
}

impl Sequence for Range {
    type Item = i64;

    fn produce(&self, accept: &mut dyn FnMut(i64) -> bool) -> bool {
        let mut next = Some(self.start);
        for _ in 0..self.count {
            let Some(value) = next else {
                break;
            };
            if !accept(value) {
                return false;
            }
            next = value.checked_add(1);
        }
        true
    }
}

/// Creates a sequence of `count` consecutive integers starting at `start`.
///
/// The sequence ends at `i64::MAX` even when `count` asks for more.
#[must_use]
pub const fn range(start: i64, count: usize) -> Range {
    Range { start, count }
}

/// A sequence yielding the same value a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    count: usize,
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn produce(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        (0..self.count).all(|_| accept(self.value.clone()))
    }
}

/// Creates a sequence that yields `count` clones of `value`.
#[must_use]
pub const fn repeat<T>(value: T, count: usize) -> Repeat<T> {
    Repeat { value, count }
}

/// A sequence backed by a raw produce function.
pub struct FromFn<F, T> {
    produce: F,
    _marker: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        Self {
            produce: self.produce.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> Sequence for FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool) -> bool,
{
    type Item = T;

    fn produce(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        (self.produce)(accept)
    }
}

/// Wraps a produce function as a sequence.
///
/// The function must follow the [`Sequence`] contract: stop calling `accept`
/// once it returns `false`, and return `false` in that case.
///
/// # Examples
///
/// ```rust
/// use tributary_core::{from_fn, Sequence};
///
/// // Powers of two, unbounded
/// let powers = from_fn(|accept: &mut dyn FnMut(u64) -> bool| {
///     let mut value = 1u64;
///     loop {
///         if !accept(value) {
///             return false;
///         }
///         value = value.saturating_mul(2);
///     }
/// });
///
/// let mut taken = Vec::new();
/// powers.produce(&mut |p| {
///     taken.push(p);
///     taken.len() < 4
/// });
/// assert_eq!(taken, vec![1, 2, 4, 8]);
/// ```
pub fn from_fn<F, T>(produce: F) -> FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool) -> bool,
{
    FromFn {
        produce,
        _marker: PhantomData,
    }
}
