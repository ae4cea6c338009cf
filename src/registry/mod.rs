//! Materialized panel registry.

mod core;

pub use core::{PanelRegistry, Placement};
