//! Value objects - Immutable objects defined by their attributes

mod hat;
mod spell;

pub use hat::{Hat, HatColor, HatSize};
pub use spell::{MagicWord, Spell};
