//! Collaborator boundaries of a layout session.
//!
//! The session never draws anything itself. Panels whose drawn state changed
//! are handed to a [`Surface`]; host reactions to focus and bootstrap events go
//! through [`SessionHooks`].

use crate::error::Result;
use crate::panel::{Panel, PanelId};

use super::focus::FocusObserver;

/// Facility that draws panels to a terminal buffer.
pub trait Surface {
    /// Create or re-position a panel with its current state.
    fn place(&mut self, panel: &Panel) -> Result<()>;

    fn remove(&mut self, id: PanelId) -> Result<()>;
}

/// Surface that discards everything, for headless layout runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn place(&mut self, _panel: &Panel) -> Result<()> {
        Ok(())
    }

    fn remove(&mut self, _id: PanelId) -> Result<()> {
        Ok(())
    }
}

/// Host callbacks fired from inside a tick.
pub trait SessionHooks: FocusObserver {
    /// Input focus was moved explicitly, e.g. by the startup fallback.
    fn on_focus_switched(&mut self, _from: Option<PanelId>, _to: PanelId) -> Result<()> {
        Ok(())
    }

    /// Load data for the working directory. Fired once per session.
    fn load_directory(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Hooks that do nothing beyond the session's own logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl FocusObserver for NoopHooks {}

impl SessionHooks for NoopHooks {}
