// Prototype: new objects are copied from an existing instance instead of
// being built from scratch. `Clone` does the copying; the traits make it
// available behind `dyn`.

use std::collections::BTreeMap;

use crate::transcript::Transcript;

// ============================================================================
// Example: Documents
// ============================================================================

pub trait DocumentPrototype {
    fn clone_document(&self) -> Box<dyn DocumentPrototype>;
    fn info(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDocument {
    content: String,
}

impl WordDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DocumentPrototype for WordDocument {
    fn clone_document(&self) -> Box<dyn DocumentPrototype> {
        Box::new(self.clone())
    }

    fn info(&self) -> String {
        format!("WordDocument with content: {}", self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcelDocument {
    data: String,
}

impl ExcelDocument {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl DocumentPrototype for ExcelDocument {
    fn clone_document(&self) -> Box<dyn DocumentPrototype> {
        Box::new(self.clone())
    }

    fn info(&self) -> String {
        format!("ExcelDocument with data: {}", self.data)
    }
}

/// Named prototypes that can be stamped out on demand.
#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: BTreeMap<String, Box<dyn DocumentPrototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, prototype: Box<dyn DocumentPrototype>) {
        let name = name.into();
        tracing::debug!(%name, "prototype registered");
        self.prototypes.insert(name, prototype);
    }

    pub fn spawn(&self, name: &str) -> Option<Box<dyn DocumentPrototype>> {
        self.prototypes.get(name).map(|p| p.clone_document())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prototypes.keys().map(String::as_str)
    }
}

// ============================================================================
// Example: Zoo animals
// ============================================================================

pub trait AnimalPrototype {
    fn clone_animal(&self) -> Box<dyn AnimalPrototype>;
    fn info(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lion {
    name: String,
    age: u32,
}

impl Lion {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl AnimalPrototype for Lion {
    fn clone_animal(&self) -> Box<dyn AnimalPrototype> {
        Box::new(self.clone())
    }

    fn info(&self) -> String {
        format!("Lion named {}, Age: {}", self.name, self.age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elephant {
    name: String,
    weight: u32,
}

impl Elephant {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

impl AnimalPrototype for Elephant {
    fn clone_animal(&self) -> Box<dyn AnimalPrototype> {
        Box::new(self.clone())
    }

    fn info(&self) -> String {
        format!("Elephant named {}, Weight: {}kg", self.name, self.weight)
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let word = WordDocument::new("This is a Word document.");
    let excel = ExcelDocument::new("This is an Excel spreadsheet.");
    let word_copy = word.clone_document();
    let excel_copy = excel.clone_document();
    out.push(word.info());
    out.push(word_copy.info());
    out.push(excel.info());
    out.push(excel_copy.info());

    let lion = Lion::new("Simba", 5);
    let elephant = Elephant::new("Dumbo", 1200);
    let lion_copy = lion.clone_animal();
    let elephant_copy = elephant.clone_animal();
    out.push(lion.info());
    out.push(lion_copy.info());
    out.push(elephant.info());
    out.push(elephant_copy.info());
    out
}
