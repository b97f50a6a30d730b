//! Creational patterns: Singleton, Factory Method, Abstract Factory, Builder
//! and Prototype.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
