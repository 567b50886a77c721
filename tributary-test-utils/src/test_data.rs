// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Named fixtures of three kinds, with total order and hashing so every
//! operator accepts them.

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataVariant {
    Animal,
    Person,
    Plant,
}

/// A name plus one numeric attribute: age for people, legs for animals,
/// height in centimetres for plants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    pub name: String,
    pub measure: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Entity),
    Animal(Entity),
    Plant(Entity),
}

impl TestData {
    #[must_use]
    pub const fn variant(&self) -> DataVariant {
        match self {
            TestData::Person(_) => DataVariant::Person,
            TestData::Animal(_) => DataVariant::Animal,
            TestData::Plant(_) => DataVariant::Plant,
        }
    }

    #[must_use]
    pub const fn entity(&self) -> &Entity {
        match self {
            TestData::Person(e) | TestData::Animal(e) | TestData::Plant(e) => e,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.entity().name
    }

    #[must_use]
    pub const fn measure(&self) -> u32 {
        self.entity().measure
    }
}

fn entity(name: &str, measure: u32) -> Entity {
    Entity {
        name: name.to_string(),
        measure,
    }
}

pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(entity(name, age))
}

pub fn animal(name: &str, legs: u32) -> TestData {
    TestData::Animal(entity(name, legs))
}

pub fn plant(name: &str, height: u32) -> TestData {
    TestData::Plant(entity(name, height))
}

pub fn person_alice() -> TestData {
    person("Alice", 25)
}

pub fn person_bob() -> TestData {
    person("Bob", 30)
}

pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

pub fn person_dave() -> TestData {
    person("Dave", 28)
}

pub fn person_diane() -> TestData {
    person("Diane", 40)
}

pub fn animal_ant() -> TestData {
    animal("Ant", 6)
}

pub fn animal_bird() -> TestData {
    animal("Bird", 2)
}

pub fn animal_cat() -> TestData {
    animal("Cat", 4)
}

pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

pub fn plant_fern() -> TestData {
    plant("Fern", 150)
}

pub fn plant_oak() -> TestData {
    plant("Oak", 1000)
}

pub fn plant_rose() -> TestData {
    plant("Rose", 15)
}

pub fn plant_sunflower() -> TestData {
    plant("Sunflower", 180)
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}, {}]", self.variant(), self.name(), self.measure())
    }
}
