// Pattern 3: Behavioral Patterns - Strategy
// A family of interchangeable payment algorithms behind one trait; the
// context picks one at runtime and can swap it mid-flight.

// ============================================================================
// Example: Strategy with Trait Objects
// ============================================================================

trait PaymentStrategy {
    fn pay(&self, amount: f64) -> String;
}

struct CreditCardPayment {
    card_number: String,
    card_holder: String,
}

impl CreditCardPayment {
    fn new(card_number: impl Into<String>, card_holder: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            card_holder: card_holder.into(),
        }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64) -> String {
        format!(
            "Processing credit card payment of ${} for card holder {} with card number {}.",
            amount, self.card_holder, self.card_number
        )
    }
}

struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64) -> String {
        format!(
            "Processing PayPal payment of ${} for email address {}.",
            amount, self.email
        )
    }
}

// Context. Starts with no strategy; processing without one is a reported
// condition, not a panic.
struct PaymentContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl PaymentContext {
    fn new() -> Self {
        Self { strategy: None }
    }

    fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    fn process_payment(&self, amount: f64) -> String {
        match &self.strategy {
            Some(strategy) => strategy.pay(amount),
            None => "No payment strategy set!".to_string(),
        }
    }
}

fn strategy_trait_object_example() {
    let mut context = PaymentContext::new();
    println!("{}", context.process_payment(50.0));

    context.set_strategy(Box::new(CreditCardPayment::new(
        "1234-5678-9876-5432",
        "John Doe",
    )));
    println!("{}", context.process_payment(100.0));

    context.set_strategy(Box::new(PayPalPayment::new("john.doe@example.com")));
    println!("{}", context.process_payment(200.0));
}

// ============================================================================
// Example: Functional Strategy with Closures
// ============================================================================

struct ClosureContext<F>
where
    F: Fn(f64) -> String,
{
    pay_fn: F,
}

impl<F> ClosureContext<F>
where
    F: Fn(f64) -> String,
{
    fn new(pay_fn: F) -> Self {
        Self { pay_fn }
    }

    fn process_payment(&self, amount: f64) -> String {
        (self.pay_fn)(amount)
    }
}

fn strategy_closure_example() {
    let cash = ClosureContext::new(|amount| format!("Accepting ${} in cash.", amount));
    println!("{}", cash.process_payment(25.0));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_message() {
        let strategy = CreditCardPayment::new("1234-5678-9876-5432", "John Doe");
        assert_eq!(
            strategy.pay(100.0),
            "Processing credit card payment of $100 for card holder John Doe \
             with card number 1234-5678-9876-5432."
        );
    }

    #[test]
    fn test_paypal_message() {
        let strategy = PayPalPayment::new("john.doe@example.com");
        assert_eq!(
            strategy.pay(200.0),
            "Processing PayPal payment of $200 for email address john.doe@example.com."
        );
    }

    #[test]
    fn test_unset_strategy_is_reported() {
        let context = PaymentContext::new();
        assert_eq!(context.process_payment(10.0), "No payment strategy set!");
    }

    #[test]
    fn test_strategy_switch_at_runtime() {
        let mut context = PaymentContext::new();

        context.set_strategy(Box::new(PayPalPayment::new("a@example.com")));
        assert!(context.process_payment(10.0).contains("PayPal"));

        context.set_strategy(Box::new(CreditCardPayment::new("1111", "A")));
        assert!(context.process_payment(10.0).contains("credit card"));
    }

    #[test]
    fn test_closure_strategy() {
        let context = ClosureContext::new(|amount| format!("paid {}", amount));
        assert_eq!(context.process_payment(5.0), "paid 5");
    }
}

fn main() {
    println!("=== Strategy Pattern (Trait Objects) ===");
    strategy_trait_object_example();
    println!();

    println!("=== Strategy Pattern (Closures) ===");
    strategy_closure_example();
}
