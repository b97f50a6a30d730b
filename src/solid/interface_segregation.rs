//! Interface Segregation: many small, client-specific traits instead of one
//! wide trait that forces implementors to stub out what they cannot do.
//!
//! Three takes on the same idea: smart-home devices, calculators split by
//! capability, and animals that only implement the abilities they have.

use crate::error::{PatternError, Result};
use crate::transcript::Transcript;

// ============================================================================
// Example: Smart devices
// ============================================================================

pub trait Switchable {
    fn turn_on(&self) -> String;
    fn turn_off(&self) -> String;
}

pub trait MusicPlayer {
    fn play_music(&self) -> String;
}

pub struct SmartLight;

impl Switchable for SmartLight {
    fn turn_on(&self) -> String {
        "Light turned on".to_string()
    }

    fn turn_off(&self) -> String {
        "Light turned off".to_string()
    }
}

pub struct SmartSpeaker;

impl Switchable for SmartSpeaker {
    fn turn_on(&self) -> String {
        "Speaker turned on".to_string()
    }

    fn turn_off(&self) -> String {
        "Speaker turned off".to_string()
    }
}

impl MusicPlayer for SmartSpeaker {
    fn play_music(&self) -> String {
        "Playing music".to_string()
    }
}

pub fn devices_demo() -> Transcript {
    let light = SmartLight;
    let speaker = SmartSpeaker;

    let mut out = Transcript::new();
    out.push(light.turn_on());
    out.push(light.turn_off());
    out.push(speaker.turn_on());
    out.push(speaker.play_music());
    out.push(speaker.turn_off());
    out
}

// ============================================================================
// Example: Calculators
// ============================================================================

pub trait BasicCalculator {
    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(PatternError::DivisionByZero);
        }
        Ok(a / b)
    }
}

/// Scientific functions on top of the basic four operations.
pub trait ScientificCalculator: BasicCalculator {
    fn sin(&self, value: f64) -> f64 {
        value.sin()
    }

    fn cos(&self, value: f64) -> f64 {
        value.cos()
    }

    fn tan(&self, value: f64) -> f64 {
        value.tan()
    }

    fn log(&self, value: f64) -> Result<f64> {
        if value <= 0.0 {
            return Err(PatternError::NonPositiveLogarithm { value });
        }
        Ok(value.ln())
    }
}

pub struct SimpleCalculator;

impl BasicCalculator for SimpleCalculator {}

pub struct EngineeringCalculator;

impl BasicCalculator for EngineeringCalculator {}
impl ScientificCalculator for EngineeringCalculator {}

// Rounds away float noise such as tan(PI/4) = 0.9999999999999999.
fn tidy(value: f64) -> f64 {
    (value * 1e12).round() / 1e12
}

fn basic_lines<C: BasicCalculator + ?Sized>(calc: &C) -> Result<Vec<String>> {
    Ok(vec![
        calc.add(10.0, 5.0).to_string(),
        calc.subtract(10.0, 5.0).to_string(),
        calc.multiply(10.0, 5.0).to_string(),
        calc.divide(10.0, 5.0)?.to_string(),
    ])
}

pub fn calculators_demo() -> Result<Transcript> {
    use std::f64::consts::{E, PI};

    let mut out = Transcript::new();
    out.push("Basic Calculator");
    out.extend(basic_lines(&SimpleCalculator)?);

    let scientific = EngineeringCalculator;
    out.push("Scientific Calculator");
    out.extend(basic_lines(&scientific)?);
    out.push(tidy(scientific.sin(PI / 2.0)).to_string());
    out.push(tidy(scientific.cos(PI)).to_string());
    out.push(tidy(scientific.tan(PI / 4.0)).to_string());
    out.push(tidy(scientific.log(E)?).to_string());
    Ok(out)
}

// ============================================================================
// Example: Animals
// ============================================================================

pub trait Animal {
    fn name(&self) -> &'static str;

    fn sleep(&self) -> String {
        format!("{} is sleeping.", self.name())
    }

    fn move_around(&self) -> String {
        format!("{} is moving.", self.name())
    }

    fn walk(&self) -> String {
        format!("{} is walking.", self.name())
    }
}

pub trait Runner: Animal {
    fn run(&self) -> String {
        format!("{} is running.", self.name())
    }
}

pub trait Swimmer: Animal {
    fn swim(&self) -> String {
        format!("{} is swimming.", self.name())
    }
}

pub trait Flyer: Animal {
    fn fly(&self) -> String {
        format!("{} is flying.", self.name())
    }
}

pub trait Hunter: Animal {
    fn hunt(&self) -> String {
        format!("{} is hunting.", self.name())
    }
}

pub trait Grazer: Animal {
    fn graze(&self) -> String {
        format!("{} is grazing.", self.name())
    }
}

macro_rules! animal {
    ($ty:ident: $($ability:ident),*) => {
        pub struct $ty;

        impl Animal for $ty {
            fn name(&self) -> &'static str {
                stringify!($ty)
            }
        }

        $(impl $ability for $ty {})*
    };
}

animal!(Crow: Flyer);
animal!(Dog: Runner);
animal!(Duck: Runner, Swimmer);
animal!(Horse: Runner, Grazer);
animal!(Lion: Runner, Hunter);

pub fn animals_demo() -> Transcript {
    let mut out = Transcript::new();
    out.push(Crow.fly());
    out.push(Dog.run());
    out.push(Duck.swim());

    let horse = Horse;
    out.push(horse.walk());
    out.push(horse.graze());
    out.push(horse.run());
    out.push(horse.graze());
    out.push(horse.sleep());

    let lion = Lion;
    out.push(lion.walk());
    out.push(lion.run());
    out.push(lion.hunt());
    out.push(lion.sleep());
    out
}

pub fn demo() -> Transcript {
    let mut out = devices_demo();
    match calculators_demo() {
        Ok(calc) => out.extend(calc.into_lines()),
        Err(err) => out.push(format!("Error: {err}")),
    }
    out.extend(animals_demo().into_lines());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devices_only_expose_their_capabilities() {
        assert_eq!(
            devices_demo().lines(),
            [
                "Light turned on",
                "Light turned off",
                "Speaker turned on",
                "Playing music",
                "Speaker turned off",
            ]
        );
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let calc = SimpleCalculator;
        assert!(matches!(calc.divide(1.0, 0.0), Err(PatternError::DivisionByZero)));
        assert_eq!(calc.divide(9.0, 3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_log_of_non_positive_is_rejected() {
        let calc = EngineeringCalculator;
        assert!(matches!(
            calc.log(0.0),
            Err(PatternError::NonPositiveLogarithm { .. })
        ));
        assert!(calc.log(-2.0).is_err());
        assert!((calc.log(1.0).unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calculators_demo_output() {
        let out = calculators_demo().unwrap();
        assert_eq!(
            out.lines(),
            [
                "Basic Calculator",
                "15",
                "5",
                "50",
                "2",
                "Scientific Calculator",
                "15",
                "5",
                "50",
                "2",
                "1",
                "-1",
                "1",
                "1",
            ]
        );
    }

    #[test]
    fn test_animals_demo_output() {
        assert_eq!(
            animals_demo().lines(),
            [
                "Crow is flying.",
                "Dog is running.",
                "Duck is swimming.",
                "Horse is walking.",
                "Horse is grazing.",
                "Horse is running.",
                "Horse is grazing.",
                "Horse is sleeping.",
                "Lion is walking.",
                "Lion is running.",
                "Lion is hunting.",
                "Lion is sleeping.",
            ]
        );
    }

    #[test]
    fn test_shared_animal_behaviour() {
        assert_eq!(Duck.move_around(), "Duck is moving.");
        assert_eq!(Crow.walk(), "Crow is walking.");
    }
}
