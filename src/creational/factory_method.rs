// Factory Method: each factory decides which concrete product to create,
// and client code only ever sees the product trait.

use crate::transcript::Transcript;

// ============================================================================
// Example: Employees
// ============================================================================

pub trait Employee {
    fn work(&self) -> String;
}

pub struct Developer;
impl Employee for Developer {
    fn work(&self) -> String {
        "Developer is coding.".to_string()
    }
}

pub struct Manager;
impl Employee for Manager {
    fn work(&self) -> String {
        "Manager is managing the team.".to_string()
    }
}

pub struct Tester;
impl Employee for Tester {
    fn work(&self) -> String {
        "Tester is testing the software.".to_string()
    }
}

pub trait EmployeeFactory {
    fn create_employee(&self) -> Box<dyn Employee>;
}

pub struct DeveloperFactory;
impl EmployeeFactory for DeveloperFactory {
    fn create_employee(&self) -> Box<dyn Employee> {
        Box::new(Developer)
    }
}

pub struct ManagerFactory;
impl EmployeeFactory for ManagerFactory {
    fn create_employee(&self) -> Box<dyn Employee> {
        Box::new(Manager)
    }
}

pub struct TesterFactory;
impl EmployeeFactory for TesterFactory {
    fn create_employee(&self) -> Box<dyn Employee> {
        Box::new(Tester)
    }
}

pub fn employee_client(factory: &dyn EmployeeFactory) -> String {
    factory.create_employee().work()
}

// ============================================================================
// Example: Shapes
// ============================================================================

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle;
impl Shape for Circle {
    fn draw(&self) -> String {
        "Drawing Circle.".to_string()
    }
}

pub struct Square;
impl Shape for Square {
    fn draw(&self) -> String {
        "Drawing Square.".to_string()
    }
}

pub struct Triangle;
impl Shape for Triangle {
    fn draw(&self) -> String {
        "Drawing Triangle.".to_string()
    }
}

pub trait ShapeFactory {
    fn create_shape(&self) -> Box<dyn Shape>;
}

pub struct CircleFactory;
impl ShapeFactory for CircleFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        Box::new(Circle)
    }
}

pub struct SquareFactory;
impl ShapeFactory for SquareFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        Box::new(Square)
    }
}

pub struct TriangleFactory;
impl ShapeFactory for TriangleFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        Box::new(Triangle)
    }
}

pub fn shape_client(factory: &dyn ShapeFactory) -> String {
    factory.create_shape().draw()
}

// ============================================================================
// Example: Platform buttons
// ============================================================================

pub trait Button {
    fn render(&self) -> String;
}

pub struct WindowsButton;
impl Button for WindowsButton {
    fn render(&self) -> String {
        "Rendering Windows Button.".to_string()
    }
}

pub struct MacOsButton;
impl Button for MacOsButton {
    fn render(&self) -> String {
        "Rendering MacOS Button.".to_string()
    }
}

pub trait ButtonFactory {
    fn create_button(&self) -> Box<dyn Button>;
}

pub struct WindowsButtonFactory;
impl ButtonFactory for WindowsButtonFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
}

pub struct MacOsButtonFactory;
impl ButtonFactory for MacOsButtonFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOsButton)
    }
}

pub fn button_client(factory: &dyn ButtonFactory) -> String {
    factory.create_button().render()
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let employee_factories: [&dyn EmployeeFactory; 3] =
        [&DeveloperFactory, &ManagerFactory, &TesterFactory];
    for factory in employee_factories {
        out.push(employee_client(factory));
    }

    let shape_factories: [&dyn ShapeFactory; 3] =
        [&CircleFactory, &SquareFactory, &TriangleFactory];
    for factory in shape_factories {
        out.push(shape_client(factory));
    }

    out.push(button_client(&WindowsButtonFactory));
    out.push(button_client(&MacOsButtonFactory));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_pick_the_product() {
        assert_eq!(employee_client(&ManagerFactory), "Manager is managing the team.");
        assert_eq!(shape_client(&TriangleFactory), "Drawing Triangle.");
        assert!(button_client(&MacOsButtonFactory).contains("MacOS"));
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Developer is coding.",
                "Manager is managing the team.",
                "Tester is testing the software.",
                "Drawing Circle.",
                "Drawing Square.",
                "Drawing Triangle.",
                "Rendering Windows Button.",
                "Rendering MacOS Button.",
            ]
        );
    }
}
