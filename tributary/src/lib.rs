// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tributary
//!
//! Lazy, push-style sequences with first-occurrence deduplication and
//! deferred, stable, multi-level sorting.
//!
//! ## Overview
//!
//! A [`Sequence`] pushes its elements into a callback; the callback returns
//! `false` to stop. Operators wrap sequences without doing any work, so a
//! pipeline is just a description until a terminal such as
//! [`to_vec`](CollectExt::to_vec) runs it.
//!
//! The library is split the same way:
//!
//! - `tributary-core`: the [`Sequence`] protocol, sources, [`Comparator`]
//!   and [`Equivalence`] contracts, [`SequenceError`]
//! - `tributary-stream`: lazy operators ([`distinct`](DistinctExt::distinct),
//!   [`order_by`](OrderByExt::order_by), [`take_items`](TakeItemsExt::take_items), ...)
//! - `tributary-exec`: terminals and the channel bridge
//!
//! ## Quick Start
//!
//! ```rust
//! use tributary_rx::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Order {
//!     customer: &'static str,
//!     total: u32,
//! }
//!
//! let orders = from_vec(vec![
//!     Order { customer: "bea", total: 40 },
//!     Order { customer: "al", total: 15 },
//!     Order { customer: "bea", total: 90 },
//!     Order { customer: "al", total: 15 },
//! ]);
//!
//! // Per customer, biggest order first, then keep one entry per customer
//! let best = orders
//!     .order_by_key(|o| o.customer)
//!     .then_by_key_descending(|o| o.total)
//!     .distinct_by_key(|o| o.customer);
//!
//! assert_eq!(
//!     best.to_vec(),
//!     vec![
//!         Order { customer: "al", total: 15 },
//!         Order { customer: "bea", total: 90 },
//!     ]
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `channel` (default): [`to_channel`](ToChannelExt::to_channel) and
//!   receiver-backed sources
//! - `tracing`: diagnostics through the `tracing` crate

#[cfg(feature = "channel")]
pub mod receiver_ext;

// Re-export core types
pub use tributary_core::{
    by_key, empty, equivalence, from_fn, from_iter, from_slice, from_vec, natural, range, repeat,
    BoxSequence, ByKey, Comparator, Equivalence, FnEquivalence, Natural, Result,
    SendBoxSequence, Sequence, SequenceError, SequenceExt,
};
#[cfg(feature = "channel")]
pub use tributary_core::{from_receiver, FromReceiver};

// Re-export operators
pub use tributary_stream::{
    DistinctByExt, DistinctByKeyExt, DistinctExt, FilterItemsExt, MapItemsExt, OrderByExt,
    OrderedSequence, SkipItemsExt, SkipWhileItemsExt, SortDirection, SortLevel, TakeItemsExt,
    TakeWhileItemsExt, WindowByCountExt,
};

// Re-export terminals
pub use tributary_exec::{AggregateExt, CollectExt};
#[cfg(feature = "channel")]
pub use tributary_exec::{ChannelCapacity, ToChannelExt};

#[cfg(feature = "channel")]
pub use receiver_ext::ReceiverExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use tributary_core::{
        by_key, empty, equivalence, from_fn, from_iter, from_slice, from_vec, natural, range,
        repeat, Comparator, Equivalence, Sequence, SequenceExt,
    };
    pub use tributary_exec::{AggregateExt, CollectExt};
    pub use tributary_stream::{
        DistinctByExt, DistinctByKeyExt, DistinctExt, FilterItemsExt, MapItemsExt, OrderByExt,
        OrderedSequence, SkipItemsExt, SkipWhileItemsExt, SortDirection, TakeItemsExt,
        TakeWhileItemsExt, WindowByCountExt,
    };

    #[cfg(feature = "channel")]
    pub use crate::receiver_ext::ReceiverExt;
    #[cfg(feature = "channel")]
    pub use tributary_core::from_receiver;
    #[cfg(feature = "channel")]
    pub use tributary_exec::{ChannelCapacity, ToChannelExt};
}
