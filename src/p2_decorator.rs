//! Pattern 2: Structural Patterns
//! Example: Decorator - Stacking Behavior Around a Component
//!
//! Run with: cargo run --bin p2_decorator
//!
//! Each decorator wraps the component behind the same trait and adds its own
//! contribution to the description and the cost. The chain is single-owner:
//! every wrapper exclusively owns the next link as a `Box<dyn Coffee>`.

// ============================================================================
// Example: Decorator with Trait Objects
// ============================================================================

trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

// Concrete component.
struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        5.0
    }
}

struct Milk {
    wrapped: Box<dyn Coffee>,
}

impl Coffee for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + 1.0
    }
}

struct Sugar {
    wrapped: Box<dyn Coffee>,
}

impl Coffee for Sugar {
    fn description(&self) -> String {
        format!("{}, Sugar", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + 0.5
    }
}

fn print_coffee(coffee: &dyn Coffee) {
    println!("Description: {}", coffee.description());
    println!("Cost: ${}", coffee.cost());
}

fn decorator_example() {
    let mut my_coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    print_coffee(my_coffee.as_ref());

    my_coffee = Box::new(Milk { wrapped: my_coffee });
    print_coffee(my_coffee.as_ref());

    my_coffee = Box::new(Sugar { wrapped: my_coffee });
    print_coffee(my_coffee.as_ref());
}

// ============================================================================
// Example: Type-safe Decorator with Generics
// ============================================================================

// Composition fixed at compile time; no boxing, no vtable.

struct WithMilk<T>(T);
struct WithSugar<T>(T);

impl<T: Coffee> Coffee for WithMilk<T> {
    fn description(&self) -> String {
        format!("{}, Milk", self.0.description())
    }

    fn cost(&self) -> f64 {
        self.0.cost() + 1.0
    }
}

impl<T: Coffee> Coffee for WithSugar<T> {
    fn description(&self) -> String {
        format!("{}, Sugar", self.0.description())
    }

    fn cost(&self) -> f64 {
        self.0.cost() + 0.5
    }
}

fn decorator_generic_example() {
    let coffee = WithSugar(WithMilk(SimpleCoffee));
    print_coffee(&coffee);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("=== Decorator Pattern (Trait Objects) ===");
    decorator_example();
    println!();

    println!("=== Decorator Pattern (Generics) ===");
    decorator_generic_example();
}
