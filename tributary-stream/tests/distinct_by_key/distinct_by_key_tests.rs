// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::{from_vec, FromVec};
use tributary_stream::{DistinctByKeyExt, MapItemsExt, TakeItemsExt};
use tributary_test_utils::test_data::{
    animal_ant, animal_bird, animal_cat, animal_dog, person_alice, person_bob, plant_rose,
    DataVariant, TestData,
};
use tributary_test_utils::{
    assert_produces, assert_produces_nothing, category_records, collect, CountingSequence, Record,
};

#[test]
fn test_distinct_by_key_first_per_category() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(category_records());

    // Act
    let result = source.distinct_by_key(|r| r.category.clone());

    // Assert
    assert_produces(&result, &[Record::new("B", 10), Record::new("A", 20)]);

    Ok(())
}

#[test]
fn test_distinct_by_key_variant() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![
        animal_dog(),
        person_alice(),
        animal_cat(),
        plant_rose(),
        person_bob(),
    ]);

    // Act
    let result = source.distinct_by_key(TestData::variant);

    // Assert
    assert_produces(&result, &[animal_dog(), person_alice(), plant_rose()]);

    Ok(())
}

#[test]
fn test_distinct_by_key_does_not_require_clone() -> anyhow::Result<()> {
    // Arrange
    struct Token(u8);
    let source = from_vec(vec![1u8, 2, 1, 3]).map_items(Token);

    // Act
    let result = source.distinct_by_key(|t| t.0);

    // Assert
    let ids: Vec<u8> = collect(&result).iter().map(|t| t.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}

#[test]
fn test_distinct_by_key_absent_source() -> anyhow::Result<()> {
    // Arrange
    let source: Option<FromVec<TestData>> = None;

    // Act
    let result = source.distinct_by_key(TestData::variant);

    // Assert
    assert_produces_nothing(&result);

    Ok(())
}

#[test]
fn test_distinct_by_key_then_take_items_stops_upstream() -> anyhow::Result<()> {
    // Arrange
    let source = CountingSequence::new(from_vec(vec![
        animal_ant(),
        animal_bird(),
        person_alice(),
        plant_rose(),
        animal_dog(),
    ]));

    // Act
    let result = source
        .clone()
        .distinct_by_key(|d: &TestData| d.variant() == DataVariant::Animal)
        .take_items(2);

    // Assert
    assert_produces(&result, &[animal_ant(), person_alice()]);
    assert_eq!(source.produced(), 3);

    Ok(())
}
