// State: each light knows its successor. A transition consumes the old
// state and hands back the new one.

use crate::transcript::Transcript;

pub trait TrafficLightState {
    fn name(&self) -> &'static str;

    fn change_light(self: Box<Self>) -> (Box<dyn TrafficLightState>, String);

    fn display(&self) -> String {
        format!("Traffic Light is {}", self.name())
    }
}

fn transition(from: &str, to: Box<dyn TrafficLightState>) -> (Box<dyn TrafficLightState>, String) {
    let line = format!("Changing from {from} to {}", to.name());
    tracing::debug!(from, to = to.name(), "state changed");
    (to, line)
}

pub struct RedLight;

impl TrafficLightState for RedLight {
    fn name(&self) -> &'static str {
        "Red"
    }

    fn change_light(self: Box<Self>) -> (Box<dyn TrafficLightState>, String) {
        transition(self.name(), Box::new(GreenLight))
    }
}

pub struct GreenLight;

impl TrafficLightState for GreenLight {
    fn name(&self) -> &'static str {
        "Green"
    }

    fn change_light(self: Box<Self>) -> (Box<dyn TrafficLightState>, String) {
        transition(self.name(), Box::new(YellowLight))
    }
}

pub struct YellowLight;

impl TrafficLightState for YellowLight {
    fn name(&self) -> &'static str {
        "Yellow"
    }

    fn change_light(self: Box<Self>) -> (Box<dyn TrafficLightState>, String) {
        transition(self.name(), Box::new(RedLight))
    }
}

pub struct TrafficLight {
    // Only `None` for the duration of a transition.
    state: Option<Box<dyn TrafficLightState>>,
}

impl TrafficLight {
    pub fn new(initial: Box<dyn TrafficLightState>) -> Self {
        Self {
            state: Some(initial),
        }
    }

    pub fn change_light(&mut self) -> String {
        match self.state.take() {
            Some(state) => {
                let (next, line) = state.change_light();
                self.state = Some(next);
                line
            }
            None => String::new(),
        }
    }

    pub fn display(&self) -> String {
        self.state.as_ref().map(|s| s.display()).unwrap_or_default()
    }

    pub fn current(&self) -> Option<&'static str> {
        self.state.as_ref().map(|s| s.name())
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new(Box::new(RedLight))
    }
}

pub fn demo() -> Transcript {
    let mut light = TrafficLight::default();
    let mut out = Transcript::new();
    out.push(light.display());
    for _ in 0..3 {
        out.push(light.change_light());
        out.push(light.display());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut light = TrafficLight::new(Box::new(GreenLight));
        for _ in 0..3 {
            light.change_light();
        }
        assert_eq!(light.current(), Some("Green"));
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Traffic Light is Red",
                "Changing from Red to Green",
                "Traffic Light is Green",
                "Changing from Green to Yellow",
                "Traffic Light is Yellow",
                "Changing from Yellow to Red",
                "Traffic Light is Red",
            ]
        );
    }
}
