//! Domain Events
//!
//! Return types from aggregate operations, communicating what happened so
//! callers can react (or log) appropriately.

pub mod transformation_events;

pub use transformation_events::*;
