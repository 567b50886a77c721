// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal operations for tributary sequences.
//!
//! Operators in `tributary-stream` only describe work. The extension traits
//! here run it:
//!
//! - [`CollectExt`]: `to_vec`, `to_map`, `to_batches`, `for_each`
//! - [`AggregateExt`]: `count`, `first`, `last`, `min`, `max` and their
//!   predicate or comparator variants
//! - [`ToChannelExt`] (feature `channel`): hand the sequence to a worker
//!   thread and read the elements from an `async_channel` receiver
//!
//! Each terminal calls `produce` exactly once. Replayable sequences can be
//! run again; single-use ones such as
//! [`FromReceiver`](tributary_core::FromReceiver) continue where they left off.
//!
//! ```rust
//! use tributary_core::from_vec;
//! use tributary_exec::{AggregateExt, CollectExt};
//! use tributary_stream::OrderByExt;
//!
//! let sorted = from_vec(vec![("b", 2), ("a", 2), ("c", 1)])
//!     .order_by_key(|(_, n)| *n)
//!     .then_by_key(|(name, _)| *name);
//!
//! assert_eq!(sorted.to_vec(), vec![("c", 1), ("a", 2), ("b", 2)]);
//! assert_eq!(sorted.first(), Some(("c", 1)));
//! assert_eq!(sorted.count(), 3);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;

pub mod aggregate;
pub mod collect;
#[cfg(feature = "channel")]
pub mod to_channel;

pub use aggregate::AggregateExt;
pub use collect::CollectExt;
#[cfg(feature = "channel")]
pub use to_channel::{ChannelCapacity, ToChannelExt};
