// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::{from_vec, FromVec};
use tributary_stream::SkipItemsExt;
use tributary_test_utils::{assert_produces, assert_produces_nothing, collect_first, naturals};

#[test]
fn test_skip_items_basic() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![1, 2, 3, 4]);

    // Act
    let result = source.skip_items(2);

    // Assert
    assert_produces(&result, &[3, 4]);

    Ok(())
}

#[test]
fn test_skip_items_zero_is_identity() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![1, 2, 3]);

    // Act
    let result = source.skip_items(0);

    // Assert
    assert_produces(&result, &[1, 2, 3]);

    Ok(())
}

#[test]
fn test_skip_items_more_than_available() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![1, 2, 3]);
    let absent: Option<FromVec<i32>> = None;

    // Act
    let result = source.skip_items(5);
    let absent = absent.skip_items(1);

    // Assert
    assert_produces_nothing(&result);
    assert_produces_nothing(&absent);

    Ok(())
}

#[test]
fn test_skip_items_on_unbounded_source() -> anyhow::Result<()> {
    // Arrange
    let result = naturals().skip_items(100);

    // Act
    let first = collect_first(&result, 2);

    // Assert
    assert_eq!(first, vec![100, 101]);

    Ok(())
}
