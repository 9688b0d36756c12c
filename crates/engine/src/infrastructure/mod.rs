//! Infrastructure - port traits and the adapters implementing them.

pub mod ports;
pub mod voice;
