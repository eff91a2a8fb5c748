// Pattern 1: Creational Patterns - Factory Method
// Lets a creator defer which concrete product it instantiates to subclasses,
// here: to implementors of a factory trait, or to a closed enum.

// ============================================================================
// Example: Factory Method with Trait Objects
// ============================================================================

trait Vehicle {
    fn show_details(&self) -> String;
}

struct Car;
impl Vehicle for Car {
    fn show_details(&self) -> String {
        "This is a Car.".to_string()
    }
}

struct Bike;
impl Vehicle for Bike {
    fn show_details(&self) -> String {
        "This is a Bike.".to_string()
    }
}

// Extending the pattern means one new product and one new factory;
// existing client code is untouched.
struct Truck;
impl Vehicle for Truck {
    fn show_details(&self) -> String {
        "This is a Truck.".to_string()
    }
}

trait VehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;
}

struct CarFactory;
impl VehicleFactory for CarFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car)
    }
}

struct BikeFactory;
impl VehicleFactory for BikeFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Bike)
    }
}

struct TruckFactory;
impl VehicleFactory for TruckFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Truck)
    }
}

fn show_new_vehicle(factory: &dyn VehicleFactory) {
    let vehicle = factory.create_vehicle();
    println!("{}", vehicle.show_details());
}

fn factory_trait_object_example() {
    show_new_vehicle(&CarFactory);
    show_new_vehicle(&BikeFactory);
    show_new_vehicle(&TruckFactory);
}

// ============================================================================
// Example: Factory with Enums (Zero-Cost)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VehicleKind {
    Car,
    Bike,
    Truck,
}

enum AnyVehicle {
    Car(Car),
    Bike(Bike),
    Truck(Truck),
}

impl AnyVehicle {
    // No heap allocation, no dynamic dispatch.
    fn new(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Car => AnyVehicle::Car(Car),
            VehicleKind::Bike => AnyVehicle::Bike(Bike),
            VehicleKind::Truck => AnyVehicle::Truck(Truck),
        }
    }

    fn show_details(&self) -> String {
        match self {
            AnyVehicle::Car(v) => v.show_details(),
            AnyVehicle::Bike(v) => v.show_details(),
            AnyVehicle::Truck(v) => v.show_details(),
        }
    }
}

fn factory_enum_example() {
    for kind in [VehicleKind::Car, VehicleKind::Bike, VehicleKind::Truck] {
        let vehicle = AnyVehicle::new(kind);
        println!("Enum factory ({:?}): {}", kind, vehicle.show_details());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_factory_creates_its_vehicle() {
        let factories: Vec<Box<dyn VehicleFactory>> = vec![
            Box::new(CarFactory),
            Box::new(BikeFactory),
            Box::new(TruckFactory),
        ];

        let details: Vec<String> = factories
            .iter()
            .map(|f| f.create_vehicle().show_details())
            .collect();

        assert_eq!(
            details,
            vec!["This is a Car.", "This is a Bike.", "This is a Truck."]
        );
    }

    #[test]
    fn test_enum_factory_matches_trait_factory() {
        assert_eq!(
            AnyVehicle::new(VehicleKind::Car).show_details(),
            CarFactory.create_vehicle().show_details()
        );
        assert_eq!(
            AnyVehicle::new(VehicleKind::Bike).show_details(),
            BikeFactory.create_vehicle().show_details()
        );
        assert_eq!(
            AnyVehicle::new(VehicleKind::Truck).show_details(),
            TruckFactory.create_vehicle().show_details()
        );
    }
}

fn main() {
    println!("=== Factory Method (Trait Objects) ===");
    factory_trait_object_example();
    println!();

    println!("=== Factory (Enums) ===");
    factory_enum_example();
}
