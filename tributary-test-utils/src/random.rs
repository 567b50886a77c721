// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Seeded pseudo-random inputs with many duplicates, for property-style tests.

use crate::record::Record;

const CATEGORIES: [&str; 4] = ["A", "B", "C", "D"];

/// `len` integers drawn from `0..distinct`, reproducible for a given seed.
#[must_use]
pub fn random_values(seed: u64, len: usize, distinct: i32) -> Vec<i32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.i32(0..distinct)).collect()
}

/// `len` records over four categories and values in `0..10`, so both sort
/// keys tie frequently.
#[must_use]
pub fn random_records(seed: u64, len: usize) -> Vec<Record> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len)
        .map(|_| {
            let category = CATEGORIES[rng.usize(0..CATEGORIES.len())];
            Record::new(category, rng.i32(0..10))
        })
        .collect()
}
