//! Aggregates - entities that own other domain objects

mod witch;

pub use witch::Witch;
