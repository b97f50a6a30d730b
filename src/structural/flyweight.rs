// Flyweight: glyph appearance (symbol + font) is shared, position is not.
// The factory hands out one `Rc` per distinct (symbol, font) pair.

use std::collections::HashMap;
use std::rc::Rc;

use crate::transcript::Transcript;

#[derive(Debug, PartialEq, Eq)]
pub struct CharacterFlyweight {
    symbol: char,
    font: String,
}

impl CharacterFlyweight {
    pub fn new(symbol: char, font: impl Into<String>) -> Self {
        Self {
            symbol,
            font: font.into(),
        }
    }

    pub fn render(&self, x: i32, y: i32) -> String {
        format!(
            "Rendering character '{}' in font '{}' at ({x}, {y})",
            self.symbol, self.font
        )
    }
}

#[derive(Default)]
pub struct FlyweightFactory {
    flyweights: HashMap<(char, String), Rc<CharacterFlyweight>>,
}

impl FlyweightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared flyweight and whether this call created it.
    pub fn get_flyweight(&mut self, symbol: char, font: &str) -> (Rc<CharacterFlyweight>, bool) {
        if let Some(existing) = self.flyweights.get(&(symbol, font.to_string())) {
            return (Rc::clone(existing), false);
        }
        tracing::debug!(%symbol, font, "flyweight created");
        let flyweight = Rc::new(CharacterFlyweight::new(symbol, font));
        self.flyweights
            .insert((symbol, font.to_string()), Rc::clone(&flyweight));
        (flyweight, true)
    }

    pub fn flyweight_count(&self) -> usize {
        self.flyweights.len()
    }
}

/// Extrinsic state: where one occurrence of a glyph sits.
pub struct CharacterContext {
    flyweight: Rc<CharacterFlyweight>,
    x: i32,
    y: i32,
}

impl CharacterContext {
    pub fn new(flyweight: Rc<CharacterFlyweight>, x: i32, y: i32) -> Self {
        Self { flyweight, x, y }
    }

    pub fn render(&self) -> String {
        self.flyweight.render(self.x, self.y)
    }
}

pub fn demo() -> Transcript {
    let characters = [
        ('A', "Arial", 10, 20),
        ('B', "Arial", 20, 20),
        ('A', "Times", 30, 20),
        ('A', "Arial", 40, 20),
        ('B', "Times", 50, 20),
    ];

    let mut factory = FlyweightFactory::new();
    let mut out = Transcript::new();
    for (symbol, font, x, y) in characters {
        let (flyweight, created) = factory.get_flyweight(symbol, font);
        if created {
            out.push(format!(
                "Creating new flyweight for character '{symbol}' with font '{font}'"
            ));
        }
        out.push(CharacterContext::new(flyweight, x, y).render());
    }
    out.push(format!(
        "Total flyweights created: {}",
        factory.flyweight_count()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flyweights_are_shared() {
        let mut factory = FlyweightFactory::new();
        let (first, created_first) = factory.get_flyweight('x', "Mono");
        let (second, created_second) = factory.get_flyweight('x', "Mono");

        assert!(created_first);
        assert!(!created_second);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(Rc::strong_count(&first), 3);
    }

    #[test]
    fn test_font_is_part_of_the_key() {
        let mut factory = FlyweightFactory::new();
        factory.get_flyweight('x', "Mono");
        factory.get_flyweight('x', "Serif");
        assert_eq!(factory.flyweight_count(), 2);
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Creating new flyweight for character 'A' with font 'Arial'",
                "Rendering character 'A' in font 'Arial' at (10, 20)",
                "Creating new flyweight for character 'B' with font 'Arial'",
                "Rendering character 'B' in font 'Arial' at (20, 20)",
                "Creating new flyweight for character 'A' with font 'Times'",
                "Rendering character 'A' in font 'Times' at (30, 20)",
                "Rendering character 'A' in font 'Arial' at (40, 20)",
                "Creating new flyweight for character 'B' with font 'Times'",
                "Rendering character 'B' in font 'Times' at (50, 20)",
                "Total flyweights created: 4",
            ]
        );
    }
}
