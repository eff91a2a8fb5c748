//! Pattern 3: Behavioral Patterns
//! Example: Observer - Subject Notifying a Dynamic Set of Listeners
//!
//! Run with: cargo run --bin p3_observer
//!
//! The weather station is the subject; displays subscribe and get told about
//! every temperature change in attachment order. Observers are held as
//! `Rc<RefCell<dyn Observer>>` so the client can keep a handle around to
//! detach the same observer later.

use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Example: Observer with Trait Objects
// ============================================================================

trait Observer {
    fn update(&mut self, temperature: f32) -> String;
}

type SharedObserver = Rc<RefCell<dyn Observer>>;

struct WeatherStation {
    temperature: f32,
    observers: Vec<SharedObserver>,
}

impl WeatherStation {
    fn new() -> Self {
        Self {
            temperature: 0.0,
            observers: Vec::new(),
        }
    }

    fn add_observer(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    fn remove_observer(&mut self, observer: &SharedObserver) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    fn set_temperature(&mut self, new_temperature: f32) {
        println!(
            "WeatherStation: New temperature is {} degrees.",
            new_temperature
        );
        self.temperature = new_temperature;
        self.notify_observers();
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            println!("{}", observer.borrow_mut().update(self.temperature));
        }
    }
}

struct PhoneDisplay;

impl Observer for PhoneDisplay {
    fn update(&mut self, temperature: f32) -> String {
        format!("PhoneDisplay: The temperature is now {} degrees.", temperature)
    }
}

struct WindowDisplay;

impl Observer for WindowDisplay {
    fn update(&mut self, temperature: f32) -> String {
        format!("WindowDisplay: The temperature is now {} degrees.", temperature)
    }
}

// Keeps every reading it saw; handy for asserting delivery.
struct TemperatureLog {
    readings: Vec<f32>,
}

impl Observer for TemperatureLog {
    fn update(&mut self, temperature: f32) -> String {
        self.readings.push(temperature);
        format!("Log: recorded {} degrees ({} readings)", temperature, self.readings.len())
    }
}

fn observer_example() {
    let mut station = WeatherStation::new();

    let phone: SharedObserver = Rc::new(RefCell::new(PhoneDisplay));
    let window: SharedObserver = Rc::new(RefCell::new(WindowDisplay));
    let log: SharedObserver = Rc::new(RefCell::new(TemperatureLog {
        readings: Vec::new(),
    }));

    station.add_observer(Rc::clone(&phone));
    station.add_observer(Rc::clone(&window));
    station.add_observer(Rc::clone(&log));

    station.set_temperature(25.0);
    station.set_temperature(30.0);

    // A detached observer stops hearing about changes.
    station.remove_observer(&window);
    station.set_temperature(18.5);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn logging_observer() -> Rc<RefCell<TemperatureLog>> {
        Rc::new(RefCell::new(TemperatureLog {
            readings: Vec::new(),
        }))
    }

    #[test]
    fn test_all_observers_see_each_update() {
        let mut station = WeatherStation::new();
        let a = logging_observer();
        let b = logging_observer();

        station.add_observer(a.clone());
        station.add_observer(b.clone());

        station.set_temperature(25.0);
        station.set_temperature(30.0);

        assert_eq!(a.borrow().readings, vec![25.0, 30.0]);
        assert_eq!(b.borrow().readings, vec![25.0, 30.0]);
    }

    #[test]
    fn test_detached_observer_is_not_notified() {
        let mut station = WeatherStation::new();
        let kept = logging_observer();
        let dropped = logging_observer();

        station.add_observer(kept.clone());
        let dropped_handle: SharedObserver = dropped.clone();
        station.add_observer(dropped_handle.clone());

        station.set_temperature(10.0);
        station.remove_observer(&dropped_handle);
        station.set_temperature(20.0);

        assert_eq!(kept.borrow().readings, vec![10.0, 20.0]);
        assert_eq!(dropped.borrow().readings, vec![10.0]);
    }

    #[test]
    fn test_update_messages() {
        assert_eq!(
            PhoneDisplay.update(25.0),
            "PhoneDisplay: The temperature is now 25 degrees."
        );
        assert_eq!(
            WindowDisplay.update(30.0),
            "WindowDisplay: The temperature is now 30 degrees."
        );
    }

    #[test]
    fn test_station_stores_latest_temperature() {
        let mut station = WeatherStation::new();
        station.set_temperature(12.5);
        assert_eq!(station.temperature, 12.5);
    }
}

fn main() {
    println!("=== Observer Pattern ===");
    observer_example();
}
