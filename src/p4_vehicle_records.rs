//! Pattern 4: Composed Records
//! Example: A base record extended by composition, not inheritance
//!
//! Run with: cargo run --bin p4_vehicle_records

/// Base record: make and model year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    make: String,
    pub year: u32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u32) -> Self {
        Vehicle {
            make: make.into(),
            year,
        }
    }

    /// Formatted make/year summary.
    pub fn info(&self) -> String {
        format!("Make:{}, Year:{}", self.make, self.year)
    }
}

/// A car is a vehicle plus a model name. The original exercise used
/// single-level class extension; here the base is embedded and the
/// shared accessor delegates. No dynamic dispatch is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u32, model: impl Into<String>) -> Self {
        Car {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    /// Delegates to the embedded vehicle.
    pub fn info(&self) -> String {
        self.vehicle.info()
    }

    /// Formatted model summary, specific to cars.
    pub fn model_info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

fn main() {
    println!("=== Composed Records ===\n");

    let my_car = Car::new("Toyota", 2021, "Corolla");
    println!("{}", my_car.info());
    println!("{}", my_car.model_info());
}
