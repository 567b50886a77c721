// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from a sequence to an `async_channel` queue, driven by a worker
//! thread.

mod implementation;

use async_channel::{Receiver, Sender};
use tributary_core::{Result, Sequence, SequenceError};

/// Capacity of the queue created by [`ToChannelExt::to_channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelCapacity {
    /// The worker never waits; the queue holds whatever has not been read.
    #[default]
    Unbounded,
    /// The worker blocks once `n` elements are waiting to be read.
    Bounded(usize),
}

impl ChannelCapacity {
    pub(crate) fn channel<T>(self) -> Result<(Sender<T>, Receiver<T>)> {
        match self {
            Self::Unbounded => Ok(async_channel::unbounded()),
            Self::Bounded(0) => Err(SequenceError::contract_violation(
                "bounded channel capacity must be at least 1",
            )),
            Self::Bounded(n) => Ok(async_channel::bounded(n)),
        }
    }
}

/// Extension trait moving a sequence onto a worker thread that feeds a
/// channel.
pub trait ToChannelExt: Sequence + Sized {
    /// Spawns one named worker thread that drives `produce` and sends every
    /// element into a new queue, returning the receiving end.
    ///
    /// # Behavior
    ///
    /// - Elements arrive in sequence order
    /// - The queue closes when the worker finishes, so receivers see the end
    ///   of the sequence as a closed channel
    /// - Dropping every receiver makes the next send fail, which stops the
    ///   producer and ends the worker
    /// - The receiver can be read synchronously (`recv_blocking`,
    ///   [`from_receiver`](tributary_core::from_receiver)) or awaited, as it
    ///   is also a `futures::Stream`
    ///
    /// # Blocking hazard
    ///
    /// With [`ChannelCapacity::Bounded`], a receiver that is kept alive but
    /// never drained blocks the worker forever once the queue is full. Either
    /// drain the receiver or drop it.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::WorkerSpawn`] if the worker thread cannot be started
    /// - [`SequenceError::ContractViolation`] for `Bounded(0)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tributary_core::range;
    /// use tributary_exec::{ChannelCapacity, ToChannelExt};
    ///
    /// let receiver = range(1, 3).to_channel(ChannelCapacity::Bounded(1)).unwrap();
    ///
    /// let mut received = Vec::new();
    /// while let Ok(n) = receiver.recv_blocking() {
    ///     received.push(n);
    /// }
    /// assert_eq!(received, vec![1, 2, 3]);
    /// ```
    fn to_channel(self, capacity: ChannelCapacity) -> Result<Receiver<Self::Item>>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static;
}

impl<S: Sequence> ToChannelExt for S {
    fn to_channel(self, capacity: ChannelCapacity) -> Result<Receiver<Self::Item>>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
    {
        let (sender, receiver) = capacity.channel()?;
        implementation::spawn_worker(self, sender)?;
        Ok(receiver)
    }
}
