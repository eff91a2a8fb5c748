//! Pattern 1: Creational Patterns
//! Example: Prototype - Cloning Objects Through Their Interface
//!
//! Run with: cargo run --bin p1_prototype
//!
//! The Prototype creates new objects by copying an existing one instead of
//! constructing from scratch. Rust's `Clone` gives the mechanism; cloning
//! through a trait object needs a small `clone_box` hook because `Clone`
//! itself is not object safe.

use std::rc::Rc;

// ============================================================================
// Example: Prototype with Trait Objects
// ============================================================================

trait Shape {
    fn clone_box(&self) -> Box<dyn Shape>;
    fn draw(&self) -> String;
    fn set_color(&mut self, color: &str);
}

#[derive(Clone)]
struct Circle {
    radius: u32,
    color: String,
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!("Drawing a {} circle with radius {}", self.color, self.radius)
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

#[derive(Clone)]
struct Square {
    side: u32,
    color: String,
}

impl Shape for Square {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!("Drawing a {} square with side {}", self.color, self.side)
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

fn prototype_example() {
    let original_circle: Box<dyn Shape> = Box::new(Circle {
        radius: 10,
        color: "Red".to_string(),
    });
    let original_square: Box<dyn Shape> = Box::new(Square {
        side: 5,
        color: "Blue".to_string(),
    });

    // Clone through the interface, then vary the copies.
    let mut cloned_circle = original_circle.clone_box();
    let mut cloned_square = original_square.clone_box();
    cloned_circle.set_color("Green");
    cloned_square.set_color("Yellow");

    println!("Original shapes:");
    println!("{}", original_circle.draw());
    println!("{}", original_square.draw());

    println!("\nCloned and modified shapes:");
    println!("{}", cloned_circle.draw());
    println!("{}", cloned_square.draw());
}

// ============================================================================
// Example: Deep vs Shallow Cloning
// ============================================================================

#[derive(Clone)]
struct SceneTemplate {
    // Shallow: the palette is reference counted and shared between clones.
    palette: Rc<Vec<String>>,
    // Deep: each clone owns its name.
    name: String,
}

fn clone_depth_example() {
    let original = SceneTemplate {
        palette: Rc::new(vec!["Red".to_string(), "Blue".to_string()]),
        name: "base scene".to_string(),
    };

    let copy = original.clone();

    println!("Palette ref count after clone: {}", Rc::strong_count(&original.palette));
    println!("Palette is shared: {}", Rc::strong_count(&original.palette) == 2);
    println!("Name cloned separately: {}", copy.name);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_then_mutate_leaves_original_untouched() {
        let original: Box<dyn Shape> = Box::new(Circle {
            radius: 10,
            color: "Red".to_string(),
        });

        let mut cloned = original.clone_box();
        cloned.set_color("Green");

        assert_eq!(original.draw(), "Drawing a Red circle with radius 10");
        assert_eq!(cloned.draw(), "Drawing a Green circle with radius 10");
    }

    #[test]
    fn test_square_clone() {
        let original: Box<dyn Shape> = Box::new(Square {
            side: 5,
            color: "Blue".to_string(),
        });

        let mut cloned = original.clone_box();
        cloned.set_color("Yellow");

        assert_eq!(original.draw(), "Drawing a Blue square with side 5");
        assert_eq!(cloned.draw(), "Drawing a Yellow square with side 5");
    }

    #[test]
    fn test_shallow_clone_shares_palette() {
        let original = SceneTemplate {
            palette: Rc::new(vec!["Red".to_string()]),
            name: "scene".to_string(),
        };

        let _copy = original.clone();
        assert_eq!(Rc::strong_count(&original.palette), 2);
    }
}

fn main() {
    println!("=== Prototype Pattern ===");
    prototype_example();
    println!();

    println!("=== Deep vs Shallow Clone ===");
    clone_depth_example();
}
