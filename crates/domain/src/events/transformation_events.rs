//! Transformation-related domain events
//!
//! A transformation always produces a toad. These types record which rule
//! decided the result, so callers can tell a renamed familiar from a toad
//! conjured because something was missing.

use serde::{Deserialize, Serialize};

use crate::entities::Toad;

/// Which rule decided the outcome of turning a familiar into a toad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOutcome {
    /// Witch wears no hat, a new toad was conjured
    NoHat,
    /// Witch's hat has no magic in it, a new toad was conjured
    HatNotMagical,
    /// Witch has no familiar, a new toad was conjured
    NoFamiliar,
    /// Familiar was already a toad and is returned untouched
    AlreadyToad,
    /// Familiar was turned into a toad keeping its name
    Transformed,
    /// Witch does not know presto chango, a new toad was conjured
    MissingSpell,
    /// Familiar has no name to carry over, a new toad was conjured
    UnnamedFamiliar,
}

impl TransformOutcome {
    /// Whether the resulting toad was conjured from nothing.
    pub fn is_conjured(&self) -> bool {
        !matches!(
            self,
            TransformOutcome::AlreadyToad | TransformOutcome::Transformed
        )
    }
}

/// The toad produced by a transformation, plus the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToadTransformation {
    pub toad: Toad,
    pub outcome: TransformOutcome,
}

impl ToadTransformation {
    pub(crate) fn conjured(outcome: TransformOutcome) -> Self {
        Self {
            toad: Toad::conjured(),
            outcome,
        }
    }

    pub fn into_toad(self) -> Toad {
        self.toad
    }
}
