// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::{from_vec, Sequence};
use tributary_stream::TakeWhileItemsExt;
use tributary_test_utils::{assert_produces, assert_produces_nothing, naturals, CountingSequence};

#[test]
fn test_take_while_items_stops_at_first_failure() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![1, 2, 5, 1, 2]);

    // Act
    let result = source.take_while_items(|v| *v < 3);

    // Assert
    assert_produces(&result, &[1, 2]);

    Ok(())
}

#[test]
fn test_take_while_items_stops_unbounded_source() -> anyhow::Result<()> {
    // Arrange
    let source = CountingSequence::new(naturals());

    // Act
    let result = source.clone().take_while_items(|v| *v < 4);

    // Assert
    assert_produces(&result, &[0, 1, 2, 3]);
    assert_eq!(source.produced(), 5);

    Ok(())
}

#[test]
fn test_take_while_items_failing_head() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![9, 1, 2]);

    // Act
    let result = source.take_while_items(|v| *v < 3);

    // Assert
    assert_produces_nothing(&result);

    Ok(())
}

#[test]
fn test_take_while_items_consumer_stop_is_reported() -> anyhow::Result<()> {
    // Arrange
    let result = from_vec(vec![1, 2, 3]).take_while_items(|_| true);

    // Act
    let completed = result.produce(&mut |v| v < 2);

    // Assert
    assert!(!completed);

    Ok(())
}
