//! Data-driven tuning for the arena simulation.
//!
//! Keep this crate free of simulation dependencies; it only parses files
//! under the workspace `data/` directory into plain structs. Callers convert
//! into runtime types as needed.

pub mod configs;
pub mod loader;
