//! Coven domain: witches, their familiars, spells and hats.
//!
//! Pure types with no IO. Invalid input is modeled as absence rather than as an
//! error: [`Spell::from_words`] returns `None` for unknown words, and
//! [`Witch::turn_familiar_into_toad`] always produces a toad.

extern crate self as coven_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod value_objects;

pub use aggregates::Witch;
pub use entities::{Avatar, Bat, Cat, Companion, Familiar, FamiliarKind, Toad};
pub use error::DomainError;
pub use events::{ToadTransformation, TransformOutcome};
pub use value_objects::{Hat, HatColor, HatSize, MagicWord, Spell};
