// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::from_vec;
use tributary_stream::{OrderByExt, SkipWhileItemsExt};
use tributary_test_utils::{assert_produces, assert_produces_nothing, category_records, Record};

#[test]
fn test_skip_while_items_skips_prefix_only() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![1, 2, 5, 1, 2]);

    // Act
    let result = source.skip_while_items(|v| *v < 3);

    // Assert
    assert_produces(&result, &[5, 1, 2]);

    Ok(())
}

#[test]
fn test_skip_while_items_all_match() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![1, 1, 1]);

    // Act
    let result = source.skip_while_items(|v| *v == 1);

    // Assert
    assert_produces_nothing(&result);

    Ok(())
}

#[test]
fn test_skip_while_items_after_sort() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(category_records());

    // Act
    let result = source
        .order_by_key(|r| r.category.clone())
        .skip_while_items(|r| r.category == "A");

    // Assert
    assert_produces(&result, &[Record::new("B", 10)]);

    Ok(())
}
