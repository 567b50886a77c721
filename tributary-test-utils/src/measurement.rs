// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An element type without native `Eq`/`Hash`, and equality contracts for it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tributary_core::Equivalence;

/// A labelled floating point reading. `f64` rules out `Eq + Hash`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub label: String,
    pub reading: f64,
}

impl Measurement {
    #[must_use]
    pub fn new(label: &str, reading: f64) -> Self {
        Self {
            label: label.to_string(),
            reading,
        }
    }
}

/// Two measurements are the same when label and reading bits match.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementEquivalence;

impl Equivalence<Measurement> for MeasurementEquivalence {
    fn equals(&self, a: &Measurement, b: &Measurement) -> bool {
        a.label == b.label && a.reading.to_bits() == b.reading.to_bits()
    }

    fn hash(&self, value: &Measurement) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.label.hash(&mut hasher);
        value.reading.to_bits().hash(&mut hasher);
        hasher.finish()
    }
}

/// Same equality as [`MeasurementEquivalence`], but every value hashes to the
/// same bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollidingEquivalence;

impl Equivalence<Measurement> for CollidingEquivalence {
    fn equals(&self, a: &Measurement, b: &Measurement) -> bool {
        MeasurementEquivalence.equals(a, b)
    }

    fn hash(&self, _value: &Measurement) -> u64 {
        0
    }
}
