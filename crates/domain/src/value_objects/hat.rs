//! Hats worn by witches.
//!
//! Only a magical hat lets a witch work transformations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// How big the hat is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HatSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl HatSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            HatSize::Small => "Small",
            HatSize::Medium => "Medium",
            HatSize::Large => "Large",
        }
    }
}

impl fmt::Display for HatSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for HatSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(HatSize::Small),
            "medium" => Ok(HatSize::Medium),
            "large" => Ok(HatSize::Large),
            _ => Err(DomainError::parse(format!("Unknown hat size: {}", s))),
        }
    }
}

/// Hat color. Witches' hats only come in black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HatColor {
    #[default]
    Black,
}

impl fmt::Display for HatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HatColor::Black => write!(f, "Black"),
        }
    }
}

impl std::str::FromStr for HatColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(HatColor::Black),
            _ => Err(DomainError::parse(format!("Unknown hat color: {}", s))),
        }
    }
}

/// A witch's hat.
///
/// Defaults to a medium, black, magical hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hat {
    #[serde(default)]
    pub color: HatColor,
    #[serde(default)]
    pub size: HatSize,
    #[serde(default = "default_is_magical")]
    pub is_magical: bool,
}

fn default_is_magical() -> bool {
    true
}

impl Default for Hat {
    fn default() -> Self {
        Self {
            color: HatColor::default(),
            size: HatSize::default(),
            is_magical: true,
        }
    }
}

impl Hat {
    /// A hat with no magic in it. Otherwise identical to the default hat.
    pub fn mundane() -> Self {
        Self {
            is_magical: false,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: HatSize) -> Self {
        self.size = size;
        self
    }
}
