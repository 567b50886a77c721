// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Tributary sequence library.
//!
//! This crate provides fixture types, instrumented sources and assertion
//! helpers for testing sequence operators. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## Fixtures
//!
//! ```rust
//! use tributary_test_utils::test_data::{person_alice, DataVariant, TestData};
//!
//! let alice = person_alice();
//! assert_eq!(alice.variant(), DataVariant::Person);
//! assert_eq!(alice.name(), "Alice");
//! assert!(matches!(alice, TestData::Person(ref e) if e.measure == 25));
//! ```
//!
//! ## `CountingSequence<S>`
//!
//! Counts how many elements a source pushed, which is how tests verify that
//! consumers stopping early really stop the upstream:
//!
//! ```rust
//! use tributary_test_utils::{collect_first, naturals, CountingSequence};
//!
//! let source = CountingSequence::new(naturals());
//! assert_eq!(collect_first(&source, 3), vec![0, 1, 2]);
//! assert_eq!(source.produced(), 3);
//! ```
//!
//! # Module Organization
//!
//! - `test_data` - Ord/Hash fixtures
//! - `record` - `Record` and `Indexed<T>` for sort tests
//! - `measurement` - a type without `Eq`/`Hash` and its equality contracts
//! - `counting` - `CountingSequence`
//! - `random` - seeded inputs
//! - `helpers` - collection and assertion functions

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod counting;
pub mod helpers;
pub mod measurement;
pub mod random;
pub mod record;
pub mod test_data;

pub use counting::CountingSequence;
pub use helpers::{
    assert_produces, assert_produces_nothing, category_records, collect, collect_first, naturals,
};
pub use measurement::{CollidingEquivalence, Measurement, MeasurementEquivalence};
pub use record::{indexed, Indexed, Record};
pub use test_data::{DataVariant, TestData};
