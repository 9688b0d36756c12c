//! Engine configuration loaded from the environment.
//!
//! Values come from `.env` files (loaded in `main`) and the process
//! environment. Every variable is optional and falls back to a default.

use std::str::FromStr;

use coven_domain::{DomainError, Familiar, FamiliarKind, Hat};

pub const WITCH_NAME_VAR: &str = "COVEN_WITCH_NAME";
pub const FAMILIAR_VAR: &str = "COVEN_FAMILIAR";
pub const HAT_VAR: &str = "COVEN_HAT";
pub const INCANTATIONS_VAR: &str = "COVEN_INCANTATIONS";

const DEFAULT_FAMILIAR: &str = "cat:Salem";
const DEFAULT_HAT: &str = "magical";
const DEFAULT_INCANTATIONS: &str = "abracadabra,ascendio";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: DomainError,
    },
}

/// Familiar to give the witch: `none`, `<kind>` or `<kind>:<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamiliarSpec {
    None,
    Some {
        kind: FamiliarKind,
        name: Option<String>,
    },
}

impl FamiliarSpec {
    pub fn build(&self) -> Option<Familiar> {
        match self {
            FamiliarSpec::None => None,
            FamiliarSpec::Some { kind, name } => Some(Familiar::new(*kind, name.clone())),
        }
    }
}

impl FromStr for FamiliarSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(FamiliarSpec::None);
        }
        let (kind, name) = match s.split_once(':') {
            Some((kind, name)) => (kind, Some(name)),
            None => (s, None),
        };
        let kind = kind.parse::<FamiliarKind>()?;
        // "cat:" means an unnamed cat, same as "cat"
        let name = name.filter(|n| !n.is_empty()).map(str::to_string);
        Ok(FamiliarSpec::Some { kind, name })
    }
}

/// Hat to put on the witch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatSpec {
    None,
    Magical,
    Mundane,
}

impl HatSpec {
    pub fn build(&self) -> Option<Hat> {
        match self {
            HatSpec::None => None,
            HatSpec::Magical => Some(Hat::default()),
            HatSpec::Mundane => Some(Hat::mundane()),
        }
    }
}

impl FromStr for HatSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(HatSpec::None),
            "magical" => Ok(HatSpec::Magical),
            "mundane" => Ok(HatSpec::Mundane),
            _ => Err(DomainError::parse(format!("Unknown hat: {}", s))),
        }
    }
}

/// Everything needed to assemble a witch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CovenConfig {
    pub witch_name: Option<String>,
    pub familiar: FamiliarSpec,
    pub hat: HatSpec,
    /// Raw incantations, unvalidated. Unknown words are dropped at assembly.
    pub incantations: Vec<String>,
}

impl CovenConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let witch_name = lookup(WITCH_NAME_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let familiar = lookup(FAMILIAR_VAR)
            .unwrap_or_else(|| DEFAULT_FAMILIAR.into())
            .parse::<FamiliarSpec>()
            .map_err(|source| ConfigError::Invalid {
                var: FAMILIAR_VAR,
                source,
            })?;

        let hat = lookup(HAT_VAR)
            .unwrap_or_else(|| DEFAULT_HAT.into())
            .parse::<HatSpec>()
            .map_err(|source| ConfigError::Invalid {
                var: HAT_VAR,
                source,
            })?;

        // Not trimmed: incantations must match exactly.
        let incantations = lookup(INCANTATIONS_VAR)
            .unwrap_or_else(|| DEFAULT_INCANTATIONS.into())
            .split(',')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            witch_name,
            familiar,
            hat,
            incantations,
        })
    }
}
