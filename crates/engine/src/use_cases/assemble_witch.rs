//! Assemble witch use case - builds a witch from configuration.

use coven_domain::{Spell, Witch};

use crate::config::CovenConfig;

/// A witch ready for use, plus the incantations that were not magic words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledWitch {
    pub witch: Witch,
    pub rejected: Vec<String>,
}

/// Builds a witch from a [`CovenConfig`].
///
/// Each configured incantation goes through [`Spell::from_words`]. Words that
/// are not recognized are skipped and reported, never treated as errors.
pub struct AssembleWitch;

impl AssembleWitch {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, config: &CovenConfig) -> AssembledWitch {
        let mut witch = Witch::new(config.witch_name.clone(), config.familiar.build());
        if let Some(hat) = config.hat.build() {
            witch = witch.with_hat(hat);
        }

        let mut rejected = Vec::new();
        for words in &config.incantations {
            match Spell::from_words(words) {
                Some(spell) => {
                    tracing::debug!(words = %words, "Witch learned spell");
                    witch.learn_spell(spell);
                }
                None => {
                    tracing::warn!(words = %words, "Not a magic word, skipping");
                    rejected.push(words.clone());
                }
            }
        }

        AssembledWitch { witch, rejected }
    }
}

impl Default for AssembleWitch {
    fn default() -> Self {
        Self::new()
    }
}
