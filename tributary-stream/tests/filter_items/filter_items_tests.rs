// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::{from_vec, range, FromVec};
use tributary_stream::FilterItemsExt;
use tributary_test_utils::test_data::{
    animal_dog, animal_spider, person_alice, plant_oak, DataVariant, TestData,
};
use tributary_test_utils::{assert_produces, assert_produces_nothing, collect_first, naturals};

#[test]
fn test_filter_items_keeps_matching() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![animal_dog(), person_alice(), animal_spider(), plant_oak()]);

    // Act
    let result = source.filter_items(|d: &TestData| d.variant() == DataVariant::Animal);

    // Assert
    assert_produces(&result, &[animal_dog(), animal_spider()]);

    Ok(())
}

#[test]
fn test_filter_items_nothing_matches() -> anyhow::Result<()> {
    // Arrange
    let source = range(1, 5);
    let absent: Option<FromVec<i64>> = None;

    // Act
    let result = source.filter_items(|v| *v > 100);
    let absent = absent.filter_items(|_| true);

    // Assert
    assert_produces_nothing(&result);
    assert_produces_nothing(&absent);

    Ok(())
}

#[test]
fn test_filter_items_on_unbounded_source() -> anyhow::Result<()> {
    // Arrange
    let result = naturals().filter_items(|v| v % 25 == 0);

    // Act
    let first = collect_first(&result, 3);

    // Assert
    assert_eq!(first, vec![0, 25, 50]);

    Ok(())
}
