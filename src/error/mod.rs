//! Crate-wide error type.

mod types;

pub use types::{LayoutError, Result};
