// Liskov Substitution: every Vehicle can be started, so any implementor
// can stand in wherever a Vehicle is expected.

use crate::transcript::Transcript;

pub trait Vehicle {
    fn start(&self) -> String;
}

pub struct Car;

impl Vehicle for Car {
    fn start(&self) -> String {
        "Car engine started".to_string()
    }
}

pub struct Bicycle;

impl Vehicle for Bicycle {
    fn start(&self) -> String {
        "Bicycle ready to ride".to_string()
    }
}

pub fn start_all(vehicles: &[&dyn Vehicle]) -> Vec<String> {
    vehicles.iter().map(|v| v.start()).collect()
}

pub fn demo() -> Transcript {
    let vehicles: [&dyn Vehicle; 2] = [&Car, &Bicycle];
    start_all(&vehicles).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutable_vehicles() {
        let car: &dyn Vehicle = &Car;
        let bike: &dyn Vehicle = &Bicycle;
        assert_eq!(car.start(), "Car engine started");
        assert_eq!(bike.start(), "Bicycle ready to ride");
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(demo().lines(), ["Car engine started", "Bicycle ready to ride"]);
    }
}
