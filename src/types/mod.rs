//! Core types for the acquaintance graph.

pub mod person;
pub mod edge;

pub use person::{Person, PersonName, School};
pub use edge::Acquaintance;
