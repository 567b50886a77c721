// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods for `async_channel::Receiver` to create sequences.

use async_channel::Receiver;
use tributary_core::{from_receiver, FromReceiver};

/// Extension trait turning a channel receiver into a single-use sequence.
pub trait ReceiverExt<T> {
    /// Wraps the receiver in a [`FromReceiver`] sequence that drains the
    /// channel until it closes.
    ///
    /// Consuming the sequence blocks the calling thread on each receive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_rx::prelude::*;
    ///
    /// let (tx, rx) = async_channel::unbounded();
    /// for n in [5, 3, 5, 1] {
    ///     tx.send_blocking(n).unwrap();
    /// }
    /// drop(tx);
    ///
    /// let sorted = rx.into_sequence().distinct().order_by(natural());
    /// assert_eq!(sorted.to_vec(), vec![1, 3, 5]);
    /// ```
    fn into_sequence(self) -> FromReceiver<T>;
}

impl<T> ReceiverExt<T> for Receiver<T> {
    fn into_sequence(self) -> FromReceiver<T> {
        from_receiver(self)
    }
}
