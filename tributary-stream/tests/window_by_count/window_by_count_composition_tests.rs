// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::from_vec;
use tributary_stream::{MapItemsExt, OrderByExt, TakeItemsExt, WindowByCountExt};
use tributary_test_utils::{assert_produces, naturals, CountingSequence};

#[test]
fn test_window_by_count_then_take_items_stops_upstream() -> anyhow::Result<()> {
    // Arrange
    let source = CountingSequence::new(naturals());

    // Act
    let result = source.clone().window_by_count(2).take_items(2);

    // Assert
    assert_produces(&result, &[vec![0, 1], vec![2, 3]]);
    assert_eq!(source.produced(), 4);

    Ok(())
}

#[test]
fn test_window_sums_sorted() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![5, 1, 2, 2, 9, 0]);

    // Act
    let result = source
        .window_by_count(2)
        .map_items(|w| w.iter().sum::<i32>())
        .order_by_key(|s| *s);

    // Assert
    assert_produces(&result, &[4, 6, 9]);

    Ok(())
}
