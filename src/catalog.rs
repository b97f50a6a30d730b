//! Registry of every runnable example, grouped by category.

use std::fmt;
use std::str::FromStr;

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};
use crate::transcript::Transcript;
use crate::{behavioral, creational, solid, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Solid,
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Solid,
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Solid => "solid",
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatternError::Config(format!("unknown category '{s}'")))
    }
}

pub struct DemoEntry {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub run: fn(&CatalogConfig) -> Transcript,
}

impl DemoEntry {
    pub fn execute(&self, config: &CatalogConfig) -> Transcript {
        tracing::info!(demo = self.name, category = %self.category, "running demo");
        let transcript = (self.run)(config);
        tracing::debug!(demo = self.name, lines = transcript.len(), "demo finished");
        transcript
    }
}

impl fmt::Debug for DemoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoEntry")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

macro_rules! demo {
    ($name:literal, $category:ident, $summary:literal, $($module:ident)::+) => {
        DemoEntry {
            name: $name,
            category: Category::$category,
            summary: $summary,
            run: |_| $($module)::+::demo(),
        }
    };
}

static CATALOG: &[DemoEntry] = &[
    demo!(
        "single-responsibility",
        Solid,
        "Order workflow split into repository, discount and confirmation",
        solid::single_responsibility
    ),
    demo!(
        "open-closed",
        Solid,
        "New payment methods without touching the processor",
        solid::open_closed
    ),
    demo!(
        "liskov-substitution",
        Solid,
        "Any vehicle can be started through the Vehicle trait",
        solid::liskov_substitution
    ),
    demo!(
        "interface-segregation",
        Solid,
        "Small capability traits for devices, calculators and animals",
        solid::interface_segregation
    ),
    DemoEntry {
        name: "dependency-inversion",
        category: Category::Solid,
        summary: "Notifiers depend on message-service traits; SMS gateways come from config",
        run: solid::dependency_inversion::demo,
    },
    demo!("singleton", Creational, "One lazily created database handle", creational::singleton),
    demo!(
        "factory-method",
        Creational,
        "Factories for employees, shapes and platform buttons",
        creational::factory_method
    ),
    demo!(
        "abstract-factory",
        Creational,
        "MySQL and MongoDB product families",
        creational::abstract_factory
    ),
    demo!(
        "builder",
        Creational,
        "A director assembling gaming and office computers",
        creational::builder
    ),
    demo!("prototype", Creational, "Cloning documents and zoo animals", creational::prototype),
    demo!(
        "adapter",
        Structural,
        "PayPal and Stripe behind one payment interface",
        structural::adapter
    ),
    demo!(
        "bridge",
        Structural,
        "Basic and advanced remotes for TVs and radios",
        structural::bridge
    ),
    demo!(
        "composite",
        Structural,
        "Files and directories sized and printed uniformly",
        structural::composite
    ),
    demo!(
        "decorator",
        Structural,
        "Logging and database decorators around notifiers",
        structural::decorator
    ),
    demo!(
        "facade",
        Structural,
        "Placing an order across inventory, payment and shipping",
        structural::facade
    ),
    demo!("flyweight", Structural, "Shared glyphs for a text editor", structural::flyweight),
    demo!("proxy", Structural, "Authentication proxy guarding user data", structural::proxy),
    demo!(
        "chain-of-responsibility",
        Behavioral,
        "A chain of level loggers",
        behavioral::chain_of_responsibility
    ),
    demo!("command", Behavioral, "Text editor commands with undo", behavioral::command),
    demo!("interpreter", Behavioral, "Postfix arithmetic expressions", behavioral::interpreter),
    demo!("iterator", Behavioral, "Walking a social media feed", behavioral::iterator),
    demo!("mediator", Behavioral, "Users chatting through a chat room", behavioral::mediator),
    demo!("memento", Behavioral, "Editor snapshots restored from a history", behavioral::memento),
    demo!(
        "observer",
        Behavioral,
        "Investors notified of stock price changes",
        behavioral::observer
    ),
    demo!("state", Behavioral, "Traffic light cycling through its states", behavioral::state),
    demo!("strategy", Behavioral, "Swappable payment strategies", behavioral::strategy),
    demo!(
        "visitor",
        Behavioral,
        "Annual review and score summary over employees",
        behavioral::visitor
    ),
];

pub fn catalog() -> &'static [DemoEntry] {
    CATALOG
}

pub fn find(name: &str) -> Result<&'static DemoEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| PatternError::UnknownDemo {
            name: name.to_string(),
        })
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static DemoEntry> {
    CATALOG.iter().filter(move |entry| entry.category == category)
}
