// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::{from_vec, repeat};
use tributary_stream::{DistinctExt, MapItemsExt};
use tributary_test_utils::test_data::{person_alice, person_bob, TestData};
use tributary_test_utils::{assert_produces, assert_produces_nothing};

#[test]
fn test_map_items_transforms_each_item() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![person_alice(), person_bob()]);

    // Act
    let result = source.map_items(|p: TestData| p.name().to_uppercase());

    // Assert
    assert_produces(&result, &["ALICE".to_string(), "BOB".to_string()]);

    Ok(())
}

#[test]
fn test_map_items_then_distinct() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![-2, 2, 3, -3, 1]);

    // Act
    let result = source.map_items(i32::abs).distinct();

    // Assert
    assert_produces(&result, &[2, 3, 1]);

    Ok(())
}

#[test]
fn test_map_items_repeat_and_empty() -> anyhow::Result<()> {
    // Arrange
    let repeated = repeat(4, 3);
    let none = repeat(4, 0);

    // Act
    let result = repeated.map_items(|v| v * v);
    let none = none.map_items(|v| v * v);

    // Assert
    assert_produces(&result, &[16, 16, 16]);
    assert_produces_nothing(&none);

    Ok(())
}
