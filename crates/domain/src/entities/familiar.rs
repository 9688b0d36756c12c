//! Familiars - animal companions bound to a witch.
//!
//! The set of familiars is closed: cats, bats and toads. Each kind has its own
//! struct so a [`Toad`] can be handed around as a concrete type, and
//! [`Familiar`] wraps the three of them for storage on a witch.
//!
//! Shared behavior lives on the [`Companion`] trait. The default
//! [`Companion::vocalization`] pluralizes the noise with `s`; bats override it
//! to use `es`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Anything with a glyph to show for it.
pub trait Avatar {
    fn avatar(&self) -> &'static str;
}

/// Behavior shared by every familiar.
pub trait Companion: Avatar {
    /// The species noise, in singular form (e.g. `"purr"`).
    fn noise(&self) -> &'static str;

    /// Display name, if the familiar has one.
    fn name(&self) -> Option<&str>;

    /// The line rendered when this familiar speaks, e.g. `"🐱 * purrs *"`.
    fn vocalization(&self) -> String {
        format!("{} * {}s *", self.avatar(), self.noise())
    }
}

// ============================================================================
// Cat
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cat {
    #[serde(default)]
    name: Option<String>,
}

impl Cat {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }
}

impl Avatar for Cat {
    fn avatar(&self) -> &'static str {
        "🐱"
    }
}

impl Companion for Cat {
    fn noise(&self) -> &'static str {
        "purr"
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ============================================================================
// Bat
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bat {
    #[serde(default)]
    name: Option<String>,
}

impl Bat {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }
}

impl Avatar for Bat {
    // No bat emoji to use here.
    fn avatar(&self) -> &'static str {
        "[bat]"
    }
}

impl Companion for Bat {
    fn noise(&self) -> &'static str {
        "screech"
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn vocalization(&self) -> String {
        format!("{} * {}es *", self.avatar(), self.noise())
    }
}

// ============================================================================
// Toad
// ============================================================================

/// A toad. Also the result of every transformation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Toad {
    #[serde(default)]
    name: Option<String>,
}

impl Toad {
    /// Name given to toads conjured from nothing.
    pub const NEW_TOAD_NAME: &'static str = "New Toad";

    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }

    /// A freshly conjured toad named [`Toad::NEW_TOAD_NAME`].
    pub fn conjured() -> Self {
        Self::named(Self::NEW_TOAD_NAME)
    }
}

impl Avatar for Toad {
    fn avatar(&self) -> &'static str {
        "🐸"
    }
}

impl Companion for Toad {
    fn noise(&self) -> &'static str {
        "croak"
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ============================================================================
// Familiar
// ============================================================================

/// The kind of a familiar, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamiliarKind {
    Cat,
    Bat,
    Toad,
}

impl fmt::Display for FamiliarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamiliarKind::Cat => write!(f, "cat"),
            FamiliarKind::Bat => write!(f, "bat"),
            FamiliarKind::Toad => write!(f, "toad"),
        }
    }
}

impl std::str::FromStr for FamiliarKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cat" => Ok(FamiliarKind::Cat),
            "bat" => Ok(FamiliarKind::Bat),
            "toad" => Ok(FamiliarKind::Toad),
            "" => Err(DomainError::validation("Familiar kind cannot be empty")),
            _ => Err(DomainError::parse(format!("Unknown familiar kind: {}", s))),
        }
    }
}

/// A witch's familiar: one of the closed set of companions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Familiar {
    Cat(Cat),
    Bat(Bat),
    Toad(Toad),
}

impl Familiar {
    /// Build a familiar of the given kind.
    pub fn new(kind: FamiliarKind, name: Option<String>) -> Self {
        match kind {
            FamiliarKind::Cat => Familiar::Cat(Cat::new(name)),
            FamiliarKind::Bat => Familiar::Bat(Bat::new(name)),
            FamiliarKind::Toad => Familiar::Toad(Toad::new(name)),
        }
    }

    pub fn kind(&self) -> FamiliarKind {
        match self {
            Familiar::Cat(_) => FamiliarKind::Cat,
            Familiar::Bat(_) => FamiliarKind::Bat,
            Familiar::Toad(_) => FamiliarKind::Toad,
        }
    }

    /// Returns the toad, if this familiar already is one.
    pub fn as_toad(&self) -> Option<&Toad> {
        match self {
            Familiar::Toad(toad) => Some(toad),
            _ => None,
        }
    }

    fn companion(&self) -> &dyn Companion {
        match self {
            Familiar::Cat(cat) => cat,
            Familiar::Bat(bat) => bat,
            Familiar::Toad(toad) => toad,
        }
    }
}

impl Avatar for Familiar {
    fn avatar(&self) -> &'static str {
        self.companion().avatar()
    }
}

impl Companion for Familiar {
    fn noise(&self) -> &'static str {
        self.companion().noise()
    }

    fn name(&self) -> Option<&str> {
        self.companion().name()
    }

    fn vocalization(&self) -> String {
        self.companion().vocalization()
    }
}

impl From<Cat> for Familiar {
    fn from(cat: Cat) -> Self {
        Familiar::Cat(cat)
    }
}

impl From<Bat> for Familiar {
    fn from(bat: Bat) -> Self {
        Familiar::Bat(bat)
    }
}

impl From<Toad> for Familiar {
    fn from(toad: Toad) -> Self {
        Familiar::Toad(toad)
    }
}
