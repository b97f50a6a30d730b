//! # Object-Oriented Design Patterns
//!
//! Small, self-contained examples of the SOLID principles and the
//! Gang-of-Four patterns. Every example module exposes its traits and
//! concrete types plus a `demo` function whose [`Transcript`] is the
//! example's expected output.
//!
//! ## SOLID Principles
//! - Single Responsibility, Open/Closed, Liskov Substitution
//! - Interface Segregation (devices, calculators, animals)
//! - Dependency Inversion (message services, configurable SMS gateways)
//!
//! ## Creational Patterns
//! - Singleton (`OnceLock`), Factory Method, Abstract Factory
//! - Builder (director + builders), Prototype (`Clone`, registry)
//!
//! ## Structural Patterns
//! - Adapter, Bridge, Composite, Decorator (generics)
//! - Facade, Flyweight (`Rc` pool), Proxy
//!
//! ## Behavioral Patterns
//! - Chain of Responsibility, Command (undo/redo), Interpreter
//! - Iterator (`Iterator`/`IntoIterator`), Mediator, Memento
//! - Observer, State (`self: Box<Self>`), Strategy, Visitor
//!
//! Run examples with the bundled binary:
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run flyweight observer
//! cargo run --bin patterns -- --config patterns.toml run dependency-inversion
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod solid;
pub mod structural;
pub mod transcript;

pub use catalog::{catalog, find, Category, DemoEntry};
pub use config::CatalogConfig;
pub use error::{PatternError, Result};
pub use transcript::Transcript;
