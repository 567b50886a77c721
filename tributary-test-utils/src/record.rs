// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A categorized value, the typical subject of a multi-level sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub category: String,
    pub value: i32,
}

impl Record {
    #[must_use]
    pub fn new(category: &str, value: i32) -> Self {
        Self {
            category: category.to_string(),
            value,
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record[{}, {}]", self.category, self.value)
    }
}

/// An element tagged with its position in the original input.
///
/// Comparators look at `value` only, so `index` reveals whether ties kept
/// their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    pub index: usize,
    pub value: T,
}

/// Tags every element with its position.
pub fn indexed<T>(values: Vec<T>) -> Vec<Indexed<T>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| Indexed { index, value })
        .collect()
}
