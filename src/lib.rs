//! Panel layout and focus-transition engine for a container dashboard.
//!
//! Each render tick the [`Session`] solves panel rectangles for the current
//! terminal frame, keeps list selections scrolled into view, tracks focus
//! transitions, and falls back to a single placeholder when the terminal is
//! too small. Drawing is left to a [`Surface`] supplied by the host.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod panel;
pub mod registry;
pub mod runtime;
pub mod width;

pub use error::{LayoutError, Result};
pub use geometry::{Rect, Size};
pub use layout::{BottomStrip, LayoutMode, ScrollWindow, SolvedLayout, focus_point, solve};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use panel::{CYCLABLE_PANELS, ListState, Panel, PanelCategory, PanelId, PanelStyle, ZOrder};
pub use registry::{PanelRegistry, Placement};
pub use runtime::{
    FocusObserver, FocusTracker, FocusTransition, LayoutConfig, NoopHooks, NullSurface,
    PanelTitles, Session, SessionHooks, Surface, TickInput, TickReport,
};
pub use width::display_width;
