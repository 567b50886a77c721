// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-use source draining an `async_channel` receiver.

use crate::Sequence;
use async_channel::Receiver;

/// A single-use sequence over the items of a channel.
///
/// `produce` blocks the calling thread on each receive and returns once the
/// channel is closed and empty, or once the consumer stops. Items consumed by
/// one `produce` call are gone; a second call continues from wherever the
/// channel currently is.
///
/// Do not call `produce` from inside an async task: receiving blocks the
/// thread.
#[derive(Debug, Clone)]
pub struct FromReceiver<T> {
    receiver: Receiver<T>,
}

impl<T> Sequence for FromReceiver<T> {
    type Item = T;

    fn produce(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        while let Ok(item) = self.receiver.recv_blocking() {
            if !accept(item) {
                return false;
            }
        }
        true
    }
}

/// Creates a single-use sequence reading from `receiver` until it closes.
///
/// # Examples
///
/// ```rust
/// use tributary_core::{from_receiver, Sequence};
///
/// let (tx, rx) = async_channel::unbounded();
/// tx.send_blocking(1).unwrap();
/// tx.send_blocking(2).unwrap();
/// drop(tx);
///
/// let mut received = Vec::new();
/// from_receiver(rx).produce(&mut |n| {
///     received.push(n);
///     true
/// });
/// assert_eq!(received, vec![1, 2]);
/// ```
#[must_use]
pub const fn from_receiver<T>(receiver: Receiver<T>) -> FromReceiver<T> {
    FromReceiver { receiver }
}
