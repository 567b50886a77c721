// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::drain;
use tributary_core::{from_receiver, Sequence};

#[test]
fn test_from_receiver_drains_until_closed() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = async_channel::unbounded();
    for v in 0..4 {
        tx.send_blocking(v)?;
    }
    drop(tx);

    // Act
    let (items, completed) = drain(&from_receiver(rx));

    // Assert
    assert_eq!(items, vec![0, 1, 2, 3]);
    assert!(completed);

    Ok(())
}

#[test]
fn test_from_receiver_is_single_use() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = async_channel::unbounded();
    for v in 0..4 {
        tx.send_blocking(v)?;
    }
    drop(tx);
    let source = from_receiver(rx);

    // Act
    let mut first = Vec::new();
    let completed = source.produce(&mut |v| {
        first.push(v);
        first.len() < 2
    });
    let (rest, _) = drain(&source);

    // Assert
    assert!(!completed);
    assert_eq!(first, vec![0, 1]);
    assert_eq!(rest, vec![2, 3]);

    Ok(())
}
