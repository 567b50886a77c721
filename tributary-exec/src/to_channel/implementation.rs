// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::Sender;
use std::thread;
use tributary_core::{Result, Sequence};

const WORKER_NAME: &str = "tributary-to-channel";

pub(super) fn spawn_worker<S>(source: S, sender: Sender<S::Item>) -> Result<()>
where
    S: Sequence + Send + 'static,
    S::Item: Send + 'static,
{
    thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || drive(&source, &sender))?;
    Ok(())
}

// The sender is dropped when the worker returns, which closes the queue.
fn drive<S: Sequence>(source: &S, sender: &Sender<S::Item>) {
    debug!("to_channel: worker started");

    let completed = source.produce(&mut |item| sender.send_blocking(item).is_ok());

    if completed {
        debug!("to_channel: worker finished, {} element(s) pending", sender.len());
    } else {
        debug!("to_channel: queue closed by receivers, producer stopped");
    }
}
