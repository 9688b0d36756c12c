//! Unified error types for the domain layer
//!
//! The core operations signal invalid input through absence (`Option`) rather
//! than errors. `DomainError` covers the remaining fallible conversions: parsing
//! catalog enums from text and validating assembly input.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for assembly input that cannot be used.
    ///
    /// # Example
    /// ```ignore
    /// if kind.is_empty() {
    ///     return Err(DomainError::validation("Familiar kind cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for HatSize {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "small" => Ok(Self::Small),
    ///             _ => Err(DomainError::parse(format!("Unknown hat size: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
