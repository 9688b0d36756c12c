//! Witch aggregate - a spellcaster with a familiar, a spellbook and a hat
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: everything is read through accessors
//! - **Valid by construction**: spells are [`Spell`] values, which can only
//!   hold recognized magic words
//! - **Outcome types**: [`Witch::transform_familiar`] reports which rule
//!   decided the result alongside the toad
//!
//! The spellbook is the only part that changes after construction, and it only
//! grows.

use serde::{Deserialize, Serialize};

use crate::entities::{Avatar, Companion, Familiar, Toad};
use crate::events::{ToadTransformation, TransformOutcome};
use crate::value_objects::{Hat, MagicWord, Spell};

/// A witch.
///
/// # Invariants
///
/// - A new witch knows exactly one spell, presto chango
/// - Spells keep the order they were learned in
/// - A witch owns at most one familiar
///
/// # Example
///
/// ```
/// use coven_domain::aggregates::Witch;
/// use coven_domain::entities::{Cat, Companion};
/// use coven_domain::value_objects::Hat;
///
/// let witch = Witch::new(Some("Sabrina".into()), Some(Cat::named("Salem").into()))
///     .with_hat(Hat::default());
///
/// let toad = witch.turn_familiar_into_toad();
/// assert_eq!(toad.name(), Some("Salem"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Witch {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    familiar: Option<Familiar>,
    #[serde(default = "initial_spells")]
    spells: Vec<Spell>,
    #[serde(default)]
    hat: Option<Hat>,
}

fn initial_spells() -> Vec<Spell> {
    vec![Spell::new(MagicWord::PrestoChango)]
}

impl Witch {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a hatless witch who knows presto chango.
    pub fn new(name: Option<String>, familiar: Option<Familiar>) -> Self {
        Self {
            name,
            familiar,
            spells: initial_spells(),
            hat: None,
        }
    }

    /// Put a hat on the witch.
    pub fn with_hat(mut self, hat: Hat) -> Self {
        self.hat = Some(hat);
        self
    }

    /// Replace the witch's spellbook. Mostly useful for witches who have
    /// forgotten presto chango.
    pub fn with_spells(mut self, spells: Vec<Spell>) -> Self {
        self.spells = spells;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn familiar(&self) -> Option<&Familiar> {
        self.familiar.as_ref()
    }

    /// Spells in the order they were learned.
    #[inline]
    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    #[inline]
    pub fn hat(&self) -> Option<&Hat> {
        self.hat.as_ref()
    }

    // =========================================================================
    // Spellbook
    // =========================================================================

    /// Add a spell to the end of the spellbook. Duplicates are kept.
    pub fn learn_spell(&mut self, spell: Spell) {
        self.spells.push(spell);
    }

    /// Whether any spell in the spellbook is cast with `word`.
    pub fn has_spell(&self, word: MagicWord) -> bool {
        self.spells.iter().any(|spell| spell.magic_words() == word)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Turn the witch's familiar into a toad.
    ///
    /// Always yields a toad: anything missing along the way results in a
    /// freshly conjured one named [`Toad::NEW_TOAD_NAME`].
    pub fn turn_familiar_into_toad(&self) -> Toad {
        self.transform_familiar().into_toad()
    }

    /// Same as [`Witch::turn_familiar_into_toad`], also reporting which rule
    /// decided the result.
    ///
    /// Rules are checked in order and the first one that applies wins:
    ///
    /// 1. no hat
    /// 2. hat is not magical
    /// 3. no familiar
    /// 4. familiar is already a toad (returned untouched)
    /// 5. presto chango is not in the spellbook
    /// 6. familiar has no name
    ///
    /// If none apply, the familiar becomes a toad with its own name.
    pub fn transform_familiar(&self) -> ToadTransformation {
        let Some(hat) = self.hat.as_ref() else {
            return ToadTransformation::conjured(TransformOutcome::NoHat);
        };
        if !hat.is_magical {
            return ToadTransformation::conjured(TransformOutcome::HatNotMagical);
        }
        let Some(familiar) = self.familiar.as_ref() else {
            return ToadTransformation::conjured(TransformOutcome::NoFamiliar);
        };
        if let Some(toad) = familiar.as_toad() {
            return ToadTransformation {
                toad: toad.clone(),
                outcome: TransformOutcome::AlreadyToad,
            };
        }
        if !self.has_spell(MagicWord::PrestoChango) {
            return ToadTransformation::conjured(TransformOutcome::MissingSpell);
        }
        match familiar.name() {
            Some(name) => ToadTransformation {
                toad: Toad::named(name),
                outcome: TransformOutcome::Transformed,
            },
            None => ToadTransformation::conjured(TransformOutcome::UnnamedFamiliar),
        }
    }
}

impl Avatar for Witch {
    fn avatar(&self) -> &'static str {
        "👩🏻"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Bat, Cat};

    fn new_toad() -> Toad {
        Toad::named(Toad::NEW_TOAD_NAME)
    }

    fn hatted(familiar: Option<Familiar>) -> Witch {
        Witch::new(Some("Hermione".into()), familiar).with_hat(Hat::default())
    }

    mod spellbook {
        use super::*;

        #[test]
        fn new_witch_knows_presto_chango_only() {
            let witch = Witch::new(None, None);
            assert_eq!(witch.spells(), &[Spell::new(MagicWord::PrestoChango)]);
            assert!(witch.has_spell(MagicWord::PrestoChango));
            assert!(!witch.has_spell(MagicWord::Alakazam));
        }

        #[test]
        fn learn_spell_preserves_order() {
            let mut witch = Witch::new(None, None);
            witch.learn_spell(Spell::new(MagicWord::HocusPocus));
            witch.learn_spell(Spell::new(MagicWord::Abracadbra));
            witch.learn_spell(Spell::new(MagicWord::HocusPocus));

            let words: Vec<_> = witch.spells().iter().map(|s| s.magic_words()).collect();
            assert_eq!(
                words,
                vec![
                    MagicWord::PrestoChango,
                    MagicWord::HocusPocus,
                    MagicWord::Abracadbra,
                    MagicWord::HocusPocus,
                ]
            );
            assert!(witch.has_spell(MagicWord::Abracadbra));
        }

        #[test]
        fn empty_spellbook_has_nothing() {
            let witch = Witch::new(None, None).with_spells(Vec::new());
            for word in MagicWord::all() {
                assert!(!witch.has_spell(*word));
            }
        }
    }

    mod transformation {
        use super::*;

        #[test]
        fn no_hat_conjures_new_toad() {
            let witch = Witch::new(None, Some(Cat::named("Salem").into()));
            let result = witch.transform_familiar();
            assert_eq!(result.toad, new_toad());
            assert_eq!(result.outcome, TransformOutcome::NoHat);
        }

        #[test]
        fn no_hat_wins_even_over_existing_toad() {
            let witch = Witch::new(None, Some(Toad::named("Tom").into()));
            assert_eq!(witch.turn_familiar_into_toad(), new_toad());
        }

        #[test]
        fn mundane_hat_conjures_new_toad() {
            let witch = Witch::new(None, Some(Cat::named("Salem").into())).with_hat(Hat::mundane());
            let result = witch.transform_familiar();
            assert_eq!(result.toad, new_toad());
            assert_eq!(result.outcome, TransformOutcome::HatNotMagical);
        }

        #[test]
        fn no_familiar_conjures_new_toad() {
            let result = hatted(None).transform_familiar();
            assert_eq!(result.toad, new_toad());
            assert_eq!(result.outcome, TransformOutcome::NoFamiliar);
        }

        #[test]
        fn existing_toad_is_returned_untouched() {
            let witch = hatted(Some(Toad::named("Tom").into())).with_spells(Vec::new());
            let result = witch.transform_familiar();
            assert_eq!(result.toad, Toad::named("Tom"));
            assert_eq!(result.outcome, TransformOutcome::AlreadyToad);
        }

        #[test]
        fn existing_unnamed_toad_stays_unnamed() {
            let witch = hatted(Some(Toad::new(None).into()));
            let toad = witch.turn_familiar_into_toad();
            assert_eq!(toad.name(), None);
        }

        #[test]
        fn named_cat_with_presto_chango_keeps_name() {
            let result = hatted(Some(Cat::named("Salem").into())).transform_familiar();
            assert_eq!(result.toad, Toad::named("Salem"));
            assert_eq!(result.outcome, TransformOutcome::Transformed);
        }

        #[test]
        fn unnamed_cat_conjures_new_toad() {
            let result = hatted(Some(Cat::new(None).into())).transform_familiar();
            assert_eq!(result.toad, new_toad());
            assert_eq!(result.outcome, TransformOutcome::UnnamedFamiliar);
        }

        #[test]
        fn bat_without_spells_conjures_new_toad() {
            let witch = hatted(Some(Bat::named("Count").into())).with_spells(Vec::new());
            let result = witch.transform_familiar();
            assert_eq!(result.toad, new_toad());
            assert_eq!(result.outcome, TransformOutcome::MissingSpell);
        }

        #[test]
        fn other_spells_do_not_transform() {
            let witch = hatted(Some(Bat::named("Count").into())).with_spells(vec![
                Spell::new(MagicWord::Abracadbra),
                Spell::new(MagicWord::HocusPocus),
            ]);
            assert_eq!(witch.turn_familiar_into_toad(), new_toad());
        }

        #[test]
        fn transformation_is_a_fixed_point() {
            let first = hatted(Some(Cat::named("Salem").into())).turn_familiar_into_toad();
            let second = hatted(Some(first.clone().into())).turn_familiar_into_toad();
            assert_eq!(first, second);

            let conjured = hatted(None).turn_familiar_into_toad();
            let again = hatted(Some(conjured.clone().into())).turn_familiar_into_toad();
            assert_eq!(conjured, again);
        }

        #[test]
        fn conjured_outcomes() {
            assert!(TransformOutcome::NoHat.is_conjured());
            assert!(TransformOutcome::UnnamedFamiliar.is_conjured());
            assert!(!TransformOutcome::AlreadyToad.is_conjured());
            assert!(!TransformOutcome::Transformed.is_conjured());
        }
    }

    #[test]
    fn test_witch_deserialize_defaults_spellbook() {
        let witch: Witch = serde_json::from_str(
            r#"{"name":"Sabrina","familiar":{"kind":"cat","name":"Salem"},"hat":{}}"#,
        )
        .unwrap();
        assert!(witch.has_spell(MagicWord::PrestoChango));
        assert_eq!(witch.hat(), Some(&Hat::default()));
        assert_eq!(witch.turn_familiar_into_toad(), Toad::named("Salem"));
    }

    #[test]
    fn test_witch_avatar() {
        assert_eq!(Witch::new(None, None).avatar(), "👩🏻");
    }
}
