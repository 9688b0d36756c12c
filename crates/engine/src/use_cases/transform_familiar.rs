//! Transform familiar use case - turns a witch's familiar into a toad and lets
//! the toad speak.

use std::sync::Arc;

use coven_domain::{Companion, ToadTransformation, Witch};

use crate::infrastructure::ports::FamiliarVoicePort;

/// Runs the toad transformation for a witch and voices the result.
pub struct TransformFamiliar {
    voice: Arc<dyn FamiliarVoicePort>,
}

impl TransformFamiliar {
    pub fn new(voice: Arc<dyn FamiliarVoicePort>) -> Self {
        Self { voice }
    }

    pub fn execute(&self, witch: &Witch) -> ToadTransformation {
        let transformation = witch.transform_familiar();

        if transformation.outcome.is_conjured() {
            tracing::info!(
                witch = witch.name().unwrap_or("<unnamed>"),
                outcome = ?transformation.outcome,
                "Conjured a new toad"
            );
        } else {
            tracing::info!(
                witch = witch.name().unwrap_or("<unnamed>"),
                outcome = ?transformation.outcome,
                toad = transformation.toad.name().unwrap_or("<unnamed>"),
                "Familiar is now a toad"
            );
        }

        self.voice.speak(&transformation.toad.vocalization());
        transformation
    }
}
