//! Pattern 1: Creational Patterns
//! Example: Singleton - Process-Wide Instance with Init-Once Semantics
//!
//! Run with: cargo run --bin p1_singleton
//!
//! The classic Singleton hides a lazily created global behind `get_instance()`.
//! That design smuggles mutable ambient state into every caller, so this
//! catalogue presents it redesigned: an explicitly initialized, process-wide
//! instance with `OnceLock` (initialized exactly once, then immutable), and
//! dependency injection as the preferred alternative when callers can simply
//! be handed the instance they need.

use std::sync::OnceLock;

// ============================================================================
// Example: Init-Once Singleton with OnceLock
// ============================================================================

struct MessageService {
    greeting: String,
}

impl MessageService {
    /// Returns the process-wide instance, creating it on first access.
    /// Every later call observes the same `&'static` value; the closure
    /// runs at most once even under concurrent first calls.
    fn global() -> &'static MessageService {
        static INSTANCE: OnceLock<MessageService> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            println!("Singleton instance created.");
            MessageService {
                greeting: "Hello from the Singleton instance!".to_string(),
            }
        })
    }

    fn show_message(&self) -> &str {
        &self.greeting
    }
}

fn singleton_example() {
    let first = MessageService::global();
    println!("{}", first.show_message());

    let second = MessageService::global();
    println!("{}", second.show_message());

    if std::ptr::eq(first, second) {
        println!("Both variables point to the same Singleton instance.");
    }
}

// ============================================================================
// Example: Dependency Injection (Preferred over Singleton)
// ============================================================================

// The same service, but constructed once at the composition root and passed
// to whoever needs it. No hidden globals, trivially testable.

struct Greeter<'a> {
    service: &'a MessageServiceInstance,
}

struct MessageServiceInstance {
    greeting: String,
}

impl MessageServiceInstance {
    fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }
}

impl<'a> Greeter<'a> {
    fn new(service: &'a MessageServiceInstance) -> Self {
        Self { service }
    }

    fn greet(&self) -> &str {
        &self.service.greeting
    }
}

fn dependency_injection_example() {
    let service = MessageServiceInstance::new("Hello from an injected instance!");
    let greeter = Greeter::new(&service);
    println!("{}", greeter.greet());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_same_instance() {
        let a = MessageService::global();
        let b = MessageService::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_global_message() {
        assert_eq!(
            MessageService::global().show_message(),
            "Hello from the Singleton instance!"
        );
    }

    #[test]
    fn test_injected_instance() {
        let service = MessageServiceInstance::new("hi");
        let greeter = Greeter::new(&service);
        assert_eq!(greeter.greet(), "hi");
    }

    #[test]
    fn test_two_injected_instances_are_independent() {
        let a = MessageServiceInstance::new("a");
        let b = MessageServiceInstance::new("b");
        assert_eq!(Greeter::new(&a).greet(), "a");
        assert_eq!(Greeter::new(&b).greet(), "b");
    }
}

fn main() {
    println!("=== Singleton Pattern (OnceLock) ===");
    singleton_example();
    println!();

    println!("=== Dependency Injection ===");
    dependency_injection_example();
}
