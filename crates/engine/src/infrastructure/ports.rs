//! Port traits for the engine's external collaborators.

/// Renders a familiar's spoken line somewhere a person can see it.
#[cfg_attr(test, mockall::automock)]
pub trait FamiliarVoicePort: Send + Sync {
    fn speak(&self, line: &str);
}
