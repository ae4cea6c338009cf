//! Layout module orchestrator.
//!
//! Geometry for the dashboard lives in the private `core` module; the scroll
//! window arithmetic shared by every list panel lives in `scroll`.

mod core;
pub mod scroll;

pub use core::{
    BottomStrip, COMPACT_HEIGHT, LayoutMode, MIN_HEIGHT, MIN_WIDTH, SolvedLayout, TINY_HEIGHT,
    is_too_small, resolve_priority, solve,
};
pub use scroll::{ScrollWindow, focus_point};
