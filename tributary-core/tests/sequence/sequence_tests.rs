// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::drain;
use std::sync::Arc;
use tributary_core::{from_vec, BoxSequence, FromVec, SendBoxSequence, Sequence, SequenceExt};

#[test]
fn test_absent_source_is_empty() -> anyhow::Result<()> {
    // Arrange
    let absent: Option<FromVec<i32>> = None;
    let present = Some(from_vec(vec![1, 2]));

    // Act
    let (absent_items, absent_completed) = drain(&absent);
    let (present_items, _) = drain(&present);

    // Assert
    assert!(absent_items.is_empty());
    assert!(absent_completed);
    assert_eq!(present_items, vec![1, 2]);

    Ok(())
}

#[test]
fn test_boxed_sequences_are_interchangeable() -> anyhow::Result<()> {
    // Arrange
    let sources: Vec<BoxSequence<'_, i32>> = vec![
        from_vec(vec![1]).boxed(),
        Some(from_vec(vec![2, 3])).boxed(),
        None::<FromVec<i32>>.boxed(),
    ];

    // Act
    let counts: Vec<usize> = sources.iter().map(|s| drain(s).0.len()).collect();

    // Assert
    assert_eq!(counts, vec![1, 2, 0]);

    Ok(())
}

#[test]
fn test_shared_sequence_across_threads() -> anyhow::Result<()> {
    // Arrange
    let source: Arc<SendBoxSequence<'static, i32>> = Arc::new(from_vec(vec![4, 5]).boxed_send());
    let shared = Arc::clone(&source);

    // Act
    let handle = std::thread::spawn(move || drain(&shared).0);
    let remote = handle.join().map_err(|_| anyhow::anyhow!("worker panicked"))?;

    // Assert
    assert_eq!(remote, drain(&source).0);

    Ok(())
}

#[test]
fn test_by_ref_does_not_consume() -> anyhow::Result<()> {
    // Arrange
    let source = from_vec(vec![7, 8]);

    // Act
    let (through_ref, _) = drain(&source.by_ref());

    // Assert
    assert_eq!(through_ref, vec![7, 8]);
    assert!(source.produce(&mut |_| true));

    Ok(())
}
