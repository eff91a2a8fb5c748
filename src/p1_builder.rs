//! Pattern 1: Creational Patterns
//! Example: Builder - Step-by-Step Construction of a Composite Product
//!
//! Run with: cargo run --bin p1_builder
//!
//! The Builder separates the construction of a complex object from its
//! representation. Three variations: a consuming fluent builder with
//! defaults, a director that fixes the construction order, and a validated
//! builder whose `build()` returns `Result` when required parts are missing.

use thiserror::Error;

// ============================================================================
// Example: Consuming Fluent Builder
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct House {
    windows: String,
    doors: String,
    rooms: String,
}

impl House {
    pub fn builder() -> HouseBuilder {
        HouseBuilder::new()
    }

    pub fn describe(&self) -> String {
        format!("House with: {}, {}, {}", self.windows, self.doors, self.rooms)
    }
}

pub struct HouseBuilder {
    windows: String,
    doors: String,
    rooms: String,
}

impl HouseBuilder {
    // Defaults describe the most modest house we can sell.
    pub fn new() -> Self {
        Self {
            windows: "2 small windows".to_string(),
            doors: "1 plain door".to_string(),
            rooms: "1 room".to_string(),
        }
    }

    pub fn windows(mut self, windows: impl Into<String>) -> Self {
        self.windows = windows.into();
        self
    }

    pub fn doors(mut self, doors: impl Into<String>) -> Self {
        self.doors = doors.into();
        self
    }

    pub fn rooms(mut self, rooms: impl Into<String>) -> Self {
        self.rooms = rooms.into();
        self
    }

    pub fn build(self) -> House {
        House {
            windows: self.windows,
            doors: self.doors,
            rooms: self.rooms,
        }
    }
}

impl Default for HouseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn fluent_builder_example() {
    let house = House::builder()
        .windows("4 large windows")
        .doors("2 wooden doors")
        .rooms("3 spacious rooms")
        .build();

    println!("{}", house.describe());
}

// ============================================================================
// Example: Director-Driven Construction
// ============================================================================

// The director knows the recipe (windows, then doors, then rooms); the
// builder knows the materials. Swapping builders swaps the product family
// without touching the recipe.

pub trait HouseAssembler {
    fn build_windows(&mut self);
    fn build_doors(&mut self);
    fn build_rooms(&mut self);
    fn into_house(self: Box<Self>) -> House;
}

pub struct FamilyHouseAssembler {
    house: HouseBuilder,
}

impl FamilyHouseAssembler {
    pub fn new() -> Self {
        Self {
            house: HouseBuilder::new(),
        }
    }
}

impl HouseAssembler for FamilyHouseAssembler {
    fn build_windows(&mut self) {
        self.house = std::mem::take(&mut self.house).windows("4 large windows");
    }

    fn build_doors(&mut self) {
        self.house = std::mem::take(&mut self.house).doors("2 wooden doors");
    }

    fn build_rooms(&mut self) {
        self.house = std::mem::take(&mut self.house).rooms("3 spacious rooms");
    }

    fn into_house(self: Box<Self>) -> House {
        self.house.build()
    }
}

pub struct Director;

impl Director {
    pub fn construct_house(builder: &mut dyn HouseAssembler) {
        builder.build_windows();
        builder.build_doors();
        builder.build_rooms();
    }
}

fn director_example() {
    let mut assembler: Box<dyn HouseAssembler> = Box::new(FamilyHouseAssembler::new());
    Director::construct_house(assembler.as_mut());

    let house = assembler.into_house();
    println!("{}", house.describe());
}

// ============================================================================
// Example: Builder with Runtime Validation
// ============================================================================

// Required parts stored as `Option`; `build()` returns a typed error for
// anything missing instead of silently producing a half-built house.

#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("a house needs windows")]
    MissingWindows,
    #[error("a house needs doors")]
    MissingDoors,
    #[error("a house needs rooms")]
    MissingRooms,
}

#[derive(Default)]
pub struct ValidatedHouseBuilder {
    windows: Option<String>,
    doors: Option<String>,
    rooms: Option<String>,
}

impl ValidatedHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn windows(mut self, windows: impl Into<String>) -> Self {
        self.windows = Some(windows.into());
        self
    }

    pub fn doors(mut self, doors: impl Into<String>) -> Self {
        self.doors = Some(doors.into());
        self
    }

    pub fn rooms(mut self, rooms: impl Into<String>) -> Self {
        self.rooms = Some(rooms.into());
        self
    }

    pub fn build(self) -> Result<House, BuildError> {
        Ok(House {
            windows: self.windows.ok_or(BuildError::MissingWindows)?,
            doors: self.doors.ok_or(BuildError::MissingDoors)?,
            rooms: self.rooms.ok_or(BuildError::MissingRooms)?,
        })
    }
}

fn validated_builder_example() {
    let complete = ValidatedHouseBuilder::new()
        .windows("6 bay windows")
        .doors("1 steel door")
        .rooms("5 rooms")
        .build();

    match complete {
        Ok(house) => println!("{}", house.describe()),
        Err(e) => println!("Error: {}", e),
    }

    let incomplete = ValidatedHouseBuilder::new().windows("2 windows").build();
    match incomplete {
        Ok(house) => println!("{}", house.describe()),
        Err(e) => println!("Error: {}", e),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let house = House::builder().build();
        assert_eq!(
            house.describe(),
            "House with: 2 small windows, 1 plain door, 1 room"
        );
    }

    #[test]
    fn test_builder_custom_parts() {
        let house = House::builder()
            .windows("4 large windows")
            .doors("2 wooden doors")
            .rooms("3 spacious rooms")
            .build();

        assert_eq!(
            house.describe(),
            "House with: 4 large windows, 2 wooden doors, 3 spacious rooms"
        );
    }

    #[test]
    fn test_director_builds_full_house() {
        let mut assembler: Box<dyn HouseAssembler> = Box::new(FamilyHouseAssembler::new());
        Director::construct_house(assembler.as_mut());
        let house = assembler.into_house();

        assert_eq!(
            house.describe(),
            "House with: 4 large windows, 2 wooden doors, 3 spacious rooms"
        );
    }

    #[test]
    fn test_validated_builder_complete() {
        let house = ValidatedHouseBuilder::new()
            .windows("w")
            .doors("d")
            .rooms("r")
            .build()
            .unwrap();

        assert_eq!(house.describe(), "House with: w, d, r");
    }

    #[test]
    fn test_validated_builder_missing_parts() {
        assert_eq!(
            ValidatedHouseBuilder::new().build().unwrap_err(),
            BuildError::MissingWindows
        );
        assert_eq!(
            ValidatedHouseBuilder::new().windows("w").build().unwrap_err(),
            BuildError::MissingDoors
        );
        assert_eq!(
            ValidatedHouseBuilder::new()
                .windows("w")
                .doors("d")
                .build()
                .unwrap_err(),
            BuildError::MissingRooms
        );
    }
}

fn main() {
    println!("=== Consuming Fluent Builder ===");
    fluent_builder_example();
    println!();

    println!("=== Director-Driven Construction ===");
    director_example();
    println!();

    println!("=== Builder with Runtime Validation ===");
    validated_builder_example();
}
