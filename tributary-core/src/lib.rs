// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types for Tributary.
//!
//! - [`Sequence`]: the push-style iteration protocol
//! - [`Equivalence`]: caller-supplied equality and hashing
//! - [`Comparator`]: caller-supplied three-way comparison
//! - source adapters such as [`from_vec`], [`range`] and [`from_fn`]
//! - [`SequenceError`]: the error type

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod comparator;
pub mod equivalence;
pub mod error;
#[cfg(feature = "channel")]
pub mod from_receiver;
pub mod sequence;
pub mod sources;

pub use self::comparator::{by_key, natural, ByKey, Comparator, Natural};
pub use self::equivalence::{equivalence, Equivalence, FnEquivalence};
pub use self::error::{Result, SequenceError};
#[cfg(feature = "channel")]
pub use self::from_receiver::{from_receiver, FromReceiver};
pub use self::sequence::{BoxSequence, SendBoxSequence, Sequence, SequenceExt};
pub use self::sources::{
    empty, from_fn, from_iter, from_slice, from_vec, range, repeat, Empty, FromFn, FromIter,
    FromSlice, FromVec, Range, Repeat,
};
