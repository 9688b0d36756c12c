//! Use cases - orchestration of domain operations for the engine.

pub mod assemble_witch;
pub mod transform_familiar;

pub use assemble_witch::{AssembleWitch, AssembledWitch};
pub use transform_familiar::TransformFamiliar;
