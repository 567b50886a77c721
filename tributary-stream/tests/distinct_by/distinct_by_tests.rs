// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tributary_core::{equivalence, from_vec, Equivalence, FromVec};
use tributary_stream::DistinctByExt;
use tributary_test_utils::{
    assert_produces, assert_produces_nothing, collect, CollidingEquivalence, Measurement,
    MeasurementEquivalence,
};

fn readings() -> Vec<Measurement> {
    vec![
        Measurement::new("t1", 20.5),
        Measurement::new("t2", 21.0),
        Measurement::new("t1", 20.5),
        Measurement::new("t1", 22.0),
        Measurement::new("t2", 21.0),
    ]
}

fn case_insensitive() -> impl Equivalence<String> {
    equivalence(
        |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        |v: &String| {
            let mut hasher = DefaultHasher::new();
            v.to_ascii_lowercase().hash(&mut hasher);
            hasher.finish()
        },
    )
}

#[test]
fn test_distinct_by_keeps_first_occurrences() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(readings());

    // Act
    let result = source.distinct_by(MeasurementEquivalence);

    // Assert
    assert_produces(
        &result,
        &[
            Measurement::new("t1", 20.5),
            Measurement::new("t2", 21.0),
            Measurement::new("t1", 22.0),
        ],
    );

    Ok(())
}

#[test]
fn test_distinct_by_colliding_hashes_still_compare_by_equality() -> anyhow::Result<()> {
    // Arrange
    let spread = from_vec(readings()).distinct_by(MeasurementEquivalence);
    let colliding = from_vec(readings()).distinct_by(CollidingEquivalence);

    // Act
    let expected = collect(&spread);
    let result = collect(&colliding);

    // Assert
    assert_eq!(result, expected);
    assert_eq!(result.len(), 3);

    Ok(())
}

#[test]
fn test_distinct_by_contract_decides_equality() -> anyhow::Result<()> {
    // Arrange
    // NaN != NaN natively, but the contract compares bit patterns
    let source = from_vec(vec![
        Measurement::new("x", f64::NAN),
        Measurement::new("x", f64::NAN),
        Measurement::new("x", 1.0),
    ]);

    // Act
    let result = collect(&source.distinct_by(MeasurementEquivalence));

    // Assert
    assert_eq!(result.len(), 2);
    assert!(result[0].reading.is_nan());
    assert_eq!(result[1], Measurement::new("x", 1.0));

    Ok(())
}

#[test]
fn test_distinct_by_function_contract() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(
        vec!["Oak", "fern", "OAK", "Fern", "rose"]
            .into_iter()
            .map(String::from)
            .collect(),
    );

    // Act
    let result = source.distinct_by(case_insensitive());

    // Assert
    assert_produces(
        &result,
        &["Oak".to_string(), "fern".to_string(), "rose".to_string()],
    );

    Ok(())
}

#[test]
fn test_distinct_by_shared_contract() -> anyhow::Result<()> {
    // Arrange
    let contract = Arc::new(MeasurementEquivalence);
    let first = from_vec(readings()).distinct_by(Arc::clone(&contract));
    let second = from_vec(readings()).distinct_by(&*contract);

    // Act
    let a = collect(&first);
    let b = collect(&second);

    // Assert
    assert_eq!(a, b);

    Ok(())
}

#[test]
fn test_distinct_by_empty_and_absent_sources() -> anyhow::Result<()> {
    // Arrange
    let empty = from_vec(Vec::<Measurement>::new()).distinct_by(MeasurementEquivalence);
    let absent: Option<FromVec<Measurement>> = None;

    // Act
    let absent = absent.distinct_by(MeasurementEquivalence);

    // Assert
    assert_produces_nothing(&empty);
    assert_produces_nothing(&absent);

    Ok(())
}

#[test]
fn test_distinct_with_present_contract() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(readings());

    // Act
    let result = source.distinct_with(Some(MeasurementEquivalence));

    // Assert
    assert_eq!(collect(&result).len(), 3);

    Ok(())
}

#[test]
#[should_panic(expected = "Contract violation")]
fn test_distinct_with_missing_contract_panics() {
    let source = from_vec(readings());

    let _ = source.distinct_with(None::<MeasurementEquivalence>);
}

#[test]
fn test_distinct_by_reproducible_across_enumerations() -> anyhow::Result<()> {
    // Arrange
    let result = from_vec(readings()).distinct_by(CollidingEquivalence);

    // Act
    let first = collect(&result);
    let second = collect(&result);

    // Assert
    assert_eq!(first, second);

    Ok(())
}
