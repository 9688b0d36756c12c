//! Coven Engine library.
//!
//! Runs the coven domain against configuration taken from the environment.
//!
//! ## Structure
//!
//! - `config` - Environment-driven configuration
//! - `use_cases/` - Orchestration of domain operations
//! - `infrastructure/` - Port traits and adapters (console voice)

pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use config::{ConfigError, CovenConfig};
