// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::{from_vec, natural};
use tributary_stream::{
    DistinctExt, FilterItemsExt, MapItemsExt, OrderByExt, SkipItemsExt, TakeItemsExt,
};
use tributary_test_utils::{assert_produces, naturals, CountingSequence};

#[test]
fn test_skip_items_then_take_items() -> anyhow::Result<()> {
    // Arrange
    let source = CountingSequence::new(naturals());

    // Act
    let result = source.clone().skip_items(2).take_items(2);

    // Assert
    assert_produces(&result, &[2, 3]);
    assert_eq!(source.produced(), 4);

    Ok(())
}

#[test]
fn test_take_items_then_skip_items() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![1, 2, 3, 4, 5]);

    // Act
    let result = source.take_items(4).skip_items(2);

    // Assert
    assert_produces(&result, &[3, 4]);

    Ok(())
}

#[test]
fn test_filter_distinct_take_on_unbounded_source() -> anyhow::Result<()> {
    // Arrange
    let source = CountingSequence::new(naturals());

    // Act
    let result = source
        .clone()
        .filter_items(|n| n % 2 == 1)
        .map_items(|n| n % 7)
        .distinct()
        .take_items(3);

    // Assert
    assert_produces(&result, &[1, 3, 5]);
    assert_eq!(source.produced(), 6);

    Ok(())
}

#[test]
fn test_order_by_descending_then_take_top() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![12, 40, 7, 40, 33]);

    // Act
    let result = source.order_by_descending(natural()).distinct().take_items(2);

    // Assert
    assert_produces(&result, &[40, 33]);

    Ok(())
}
