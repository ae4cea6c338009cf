//! Panel identities and per-panel state.
//!
//! Every panel the dashboard can show is a [`PanelId`] variant; its
//! [`PanelCategory`] decides how layout and focus treat it.

mod core;

pub use core::{
    CYCLABLE_PANELS, ListState, Panel, PanelCategory, PanelId, PanelStyle, STACKED_PANELS, ZOrder,
};
