//! Domain entities

mod familiar;

pub use familiar::{Avatar, Bat, Cat, Companion, Familiar, FamiliarKind, Toad};
