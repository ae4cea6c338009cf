//! Per-tick layout orchestration.
//!
//! A [`Session`] owns everything that must survive between ticks: the panel
//! registry, focus history, the remembered priority panel and the bootstrap
//! flag. Hosts call [`Session::tick`] on every resize and focus change with the
//! data sampled for that tick plus their [`Surface`] and [`SessionHooks`].

use crossterm::style::Color;
use serde_json::Value;

use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Size};
use crate::layout::{LayoutMode, ScrollWindow, is_too_small, resolve_priority, solve};
use crate::logging::{LAYOUT_TARGET, LogLevel, Logger, METRICS_TARGET, json_kv};
use crate::metrics::LayoutMetrics;
use crate::panel::{CYCLABLE_PANELS, ListState, PanelId, ZOrder};
use crate::registry::{PanelRegistry, Placement};

pub mod config;
pub mod focus;
pub mod surface;

pub use config::{LayoutConfig, PanelTitles, resolve_color};
pub use focus::{FocusObserver, FocusTracker, FocusTransition};
pub use surface::{NoopHooks, NullSurface, SessionHooks, Surface};

/// Materialization order for the normal layout.
const PANEL_ORDER: [PanelId; 8] = [
    PanelId::Main,
    PanelId::Status,
    PanelId::Services,
    PanelId::Containers,
    PanelId::Images,
    PanelId::Options,
    PanelId::AppStatus,
    PanelId::Information,
];

/// Panel focused when nothing holds focus at startup.
const FALLBACK_FOCUS: PanelId = PanelId::Containers;
/// Panel the startup fallback then switches focus to.
const FALLBACK_SWITCH: PanelId = PanelId::Services;
const INITIAL_PRIORITY: PanelId = PanelId::Services;

/// Data sampled from collaborators for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput<'a> {
    pub frame: Size,
    pub status_text: &'a str,
    pub services: ListState,
    pub containers: ListState,
    pub images: ListState,
    /// Ignored unless a menu popup is registered.
    pub menu: ListState,
}

impl<'a> TickInput<'a> {
    pub fn new(frame: Size) -> Self {
        Self {
            frame,
            status_text: "",
            services: ListState::default(),
            containers: ListState::default(),
            images: ListState::default(),
            menu: ListState::default(),
        }
    }

    pub fn with_status(mut self, status_text: &'a str) -> Self {
        self.status_text = status_text;
        self
    }

    pub fn with_list(mut self, id: PanelId, list: ListState) -> Self {
        match id {
            PanelId::Services => self.services = list,
            PanelId::Containers => self.containers = list,
            PanelId::Images => self.images = list,
            PanelId::Menu => self.menu = list,
            _ => {}
        }
        self
    }

    fn lists(&self) -> [(PanelId, ListState); 4] {
        [
            (PanelId::Services, self.services),
            (PanelId::Containers, self.containers),
            (PanelId::Images, self.images),
            (PanelId::Menu, self.menu),
        ]
    }
}

/// What a tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub mode: LayoutMode,
    /// Panel holding size priority; `None` when degraded.
    pub priority: Option<PanelId>,
    pub created: Vec<PanelId>,
    pub transition: Option<FocusTransition>,
    pub fallback_applied: bool,
    pub bootstrapped: bool,
    /// Panels handed to the surface.
    pub flushed: usize,
}

impl TickReport {
    fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            priority: None,
            created: Vec::new(),
            transition: None,
            fallback_applied: false,
            bootstrapped: false,
            flushed: 0,
        }
    }
}

/// Layout state for one running dashboard.
pub struct Session {
    config: LayoutConfig,
    registry: PanelRegistry,
    tracker: FocusTracker,
    current: Option<PanelId>,
    priority: PanelId,
    bootstrap_done: bool,
    metrics: LayoutMetrics,
    logger: Option<Logger>,
}

impl Session {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            registry: PanelRegistry::new(),
            tracker: FocusTracker::new(),
            current: None,
            priority: INITIAL_PRIORITY,
            bootstrap_done: false,
            metrics: LayoutMetrics::new(),
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.tracker = std::mem::take(&mut self.tracker).with_logger(logger.clone());
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Panel holding literal input focus.
    pub fn current_focus(&self) -> Option<PanelId> {
        self.current
    }

    /// Last non-popup panel a transition fired for.
    pub fn previous_focus(&self) -> Option<PanelId> {
        self.tracker.previous()
    }

    /// Cyclable panel that currently gets size priority.
    pub fn priority(&self) -> PanelId {
        self.priority
    }

    pub fn bootstrap_done(&self) -> bool {
        self.bootstrap_done
    }

    /// Give input focus to `id` without notifying hooks. Transitions fire on
    /// the next tick.
    pub fn set_current_focus(&mut self, id: PanelId) {
        self.current = Some(id);
    }

    /// Move input focus from `from` to `to` and tell the host.
    pub fn switch_focus<H>(
        &mut self,
        from: Option<PanelId>,
        to: PanelId,
        hooks: &mut H,
    ) -> Result<()>
    where
        H: SessionHooks + ?Sized,
    {
        self.current = Some(to);
        self.log(
            LogLevel::Debug,
            "focus_switched",
            [
                json_kv("from", from.map(PanelId::name)),
                json_kv("to", to.name()),
            ],
        );
        hooks.on_focus_switched(from, to)
    }

    /// Move focus to the next (or previous) cyclable panel.
    pub fn cycle_focus<H>(&mut self, forward: bool, hooks: &mut H) -> Result<PanelId>
    where
        H: SessionHooks + ?Sized,
    {
        let anchor = resolve_priority(self.current, self.priority);
        let count = CYCLABLE_PANELS.len();
        let idx = CYCLABLE_PANELS
            .iter()
            .position(|id| *id == anchor)
            .unwrap_or(0);
        let next = if forward {
            CYCLABLE_PANELS[(idx + 1) % count]
        } else {
            CYCLABLE_PANELS[(idx + count - 1) % count]
        };
        self.switch_focus(self.current, next, hooks)?;
        Ok(next)
    }

    /// Register or re-position a popup panel built by the host.
    pub fn register_popup(&mut self, id: PanelId, rect: Rect) -> Result<Placement> {
        if !id.is_popup() {
            return Err(LayoutError::NotAPopup(id));
        }
        let placement = self.registry.materialize(id, rect);
        if placement == Placement::Created {
            self.registry.panel_mut(id)?.z = ZOrder::Top;
            self.metrics.record_created();
        }
        Ok(placement)
    }

    /// Tear a popup down; focus returns to the last tracked panel.
    pub fn dismiss_popup<S>(&mut self, id: PanelId, surface: &mut S) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        if !id.is_popup() {
            return Err(LayoutError::NotAPopup(id));
        }
        if self.registry.remove(id).is_some() {
            surface.remove(id)?;
        }
        if self.current == Some(id) {
            self.current = self.tracker.previous();
        }
        Ok(())
    }

    /// Run one layout tick.
    pub fn tick<S, H>(
        &mut self,
        input: &TickInput<'_>,
        surface: &mut S,
        hooks: &mut H,
    ) -> Result<TickReport>
    where
        S: Surface + ?Sized,
        H: SessionHooks + ?Sized,
    {
        if is_too_small(input.frame) {
            let report = self.degraded_tick(input.frame, surface)?;
            self.metrics.record_tick(true);
            self.maybe_emit_metrics();
            return Ok(report);
        }

        self.clear_placeholder(surface)?;

        let priority = resolve_priority(self.current, self.priority);
        self.priority = priority;

        let layout = solve(
            input.frame,
            priority,
            input.status_text,
            &self.config.version,
        );
        let mut report = TickReport::new(layout.mode());
        report.priority = Some(priority);

        for id in PANEL_ORDER {
            let Some(rect) = layout.rect(id) else {
                continue;
            };
            match self.registry.materialize(id, rect) {
                Placement::Created => {
                    self.setup_created(id)?;
                    report.created.push(id);
                }
                Placement::Moved => self.metrics.record_moved(),
                Placement::Unchanged => {}
            }
        }

        self.keep_selection_visible(input)?;

        self.tracker.highlight(&mut self.registry, self.current);
        report.transition = self.tracker.observe(self.current, hooks)?;
        if report.transition.is_some() {
            self.metrics.record_transition();
        }

        if self.current.is_none() {
            self.assign_fallback_focus(hooks)?;
            report.fallback_applied = true;
        }

        if !self.bootstrap_done && self.registry.contains(PanelId::Information) {
            self.bootstrap_done = true;
            self.log(LogLevel::Info, "loading_directory", std::iter::empty());
            hooks.load_directory()?;
            report.bootstrapped = true;
        }

        report.flushed = self.flush(surface)?;
        self.metrics.record_tick(false);
        self.maybe_emit_metrics();
        Ok(report)
    }

    fn degraded_tick<S>(&mut self, frame: Size, surface: &mut S) -> Result<TickReport>
    where
        S: Surface + ?Sized,
    {
        let mut report = TickReport::new(LayoutMode::Degraded);
        let layout = solve(frame, self.priority, "", &self.config.version);
        if let Some(rect) = layout.rect(PanelId::Limit) {
            if self.registry.materialize(PanelId::Limit, rect) == Placement::Created {
                self.setup_created(PanelId::Limit)?;
                report.created.push(PanelId::Limit);
                self.log(
                    LogLevel::Info,
                    "terminal_too_small",
                    [
                        json_kv("width", frame.width),
                        json_kv("height", frame.height),
                    ],
                );
            }
        }
        report.flushed = self.flush(surface)?;
        Ok(report)
    }

    fn clear_placeholder<S>(&mut self, surface: &mut S) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        if self.registry.remove(PanelId::Limit).is_some() {
            surface.remove(PanelId::Limit)?;
            self.log(LogLevel::Info, "terminal_large_enough", std::iter::empty());
        }
        Ok(())
    }

    /// Runs setup for a freshly created panel. A panel whose setup fails is
    /// unregistered so the next tick creates it again.
    fn setup_created(&mut self, id: PanelId) -> Result<()> {
        if let Err(err) = self.setup_panel(id) {
            self.registry.remove(id);
            return Err(err);
        }
        self.metrics.record_created();
        Ok(())
    }

    /// One-time setup on first materialization.
    fn setup_panel(&mut self, id: PanelId) -> Result<()> {
        let title = self.config.titles.title_for(id).map(str::to_string);
        let options_fg = match id {
            PanelId::Options => Some(self.config.options_color()?),
            _ => None,
        };
        let version = self.config.version.clone();

        let panel = self.registry.panel_mut(id)?;
        panel.title = title;
        match id {
            PanelId::Main => {
                panel.style.wrap = true;
                panel.style.fg = Color::White;
            }
            PanelId::Status | PanelId::Services | PanelId::Containers | PanelId::Images => {
                panel.style.fg = Color::White;
            }
            PanelId::Options => {
                panel.style.frame = false;
                if let Some(fg) = options_fg {
                    panel.style.fg = fg;
                }
            }
            PanelId::AppStatus => {
                panel.style.frame = false;
                panel.style.fg = Color::Cyan;
                panel.z = ZOrder::Bottom;
            }
            PanelId::Information => {
                panel.style.frame = false;
                panel.style.fg = Color::Green;
                panel.content = Some(version);
            }
            PanelId::Limit => {
                panel.style.wrap = true;
                panel.z = ZOrder::Top;
            }
            PanelId::Menu | PanelId::Confirmation => {
                panel.z = ZOrder::Top;
            }
        }

        self.log(
            LogLevel::Debug,
            "panel_created",
            [json_kv("panel", id.name())],
        );
        Ok(())
    }

    fn keep_selection_visible(&mut self, input: &TickInput<'_>) -> Result<()> {
        for (id, list) in input.lists() {
            // The menu only exists while its popup is open.
            let Some(panel) = self.registry.get(id) else {
                continue;
            };
            let window = ScrollWindow::new(list, panel.rect.inner_height());
            let offset = window.offset_from(panel.scroll_offset);
            self.registry.update_list(id, list, offset)?;
        }
        Ok(())
    }

    fn assign_fallback_focus<H>(&mut self, hooks: &mut H) -> Result<()>
    where
        H: SessionHooks + ?Sized,
    {
        self.current = Some(FALLBACK_FOCUS);
        self.log(
            LogLevel::Info,
            "fallback_focus",
            [json_kv("panel", FALLBACK_FOCUS.name())],
        );
        self.switch_focus(None, FALLBACK_SWITCH, hooks)
    }

    fn flush<S>(&mut self, surface: &mut S) -> Result<usize>
    where
        S: Surface + ?Sized,
    {
        let dirty = self.registry.take_dirty();
        for panel in &dirty {
            surface.place(panel)?;
        }
        self.metrics.record_flush(dirty.len());
        Ok(dirty.len())
    }

    fn maybe_emit_metrics(&self) {
        let interval = self.config.metrics_interval_ticks;
        if interval == 0 || self.metrics.ticks() % interval != 0 {
            return;
        }
        if let Some(logger) = self.logger.as_ref() {
            let _ = logger.log_event(self.metrics.snapshot().to_log_event(METRICS_TARGET));
        }
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let _ = logger.log_with_fields(level, LAYOUT_TARGET, message, fields);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(LayoutConfig::default().with_version("v1.2.3"))
    }

    #[test]
    fn cycle_wraps_through_left_column() {
        let mut session = session();
        let mut hooks = NoopHooks;
        session.set_current_focus(PanelId::Images);
        assert_eq!(session.cycle_focus(true, &mut hooks).unwrap(), PanelId::Status);
        assert_eq!(session.cycle_focus(false, &mut hooks).unwrap(), PanelId::Images);
    }

    #[test]
    fn cycle_from_popup_uses_remembered_priority() {
        let mut session = session();
        session.set_current_focus(PanelId::Menu);
        let next = session.cycle_focus(true, &mut NoopHooks).unwrap();
        assert_eq!(next, PanelId::Containers);
    }

    #[test]
    fn only_popups_register() {
        let mut session = session();
        let err = session
            .register_popup(PanelId::Main, Rect::new(0, 0, 4, 4))
            .unwrap_err();
        assert!(matches!(err, LayoutError::NotAPopup(PanelId::Main)));
        assert_eq!(
            session
                .register_popup(PanelId::Menu, Rect::new(0, 0, 4, 4))
                .unwrap(),
            Placement::Created
        );
        assert_eq!(
            session.registry().get(PanelId::Menu).unwrap().z,
            ZOrder::Top
        );
    }

    #[test]
    fn dismissing_focused_popup_restores_previous() {
        let mut session = session();
        let mut surface = NullSurface;
        let input = TickInput::new(Size::new(120, 40));
        session.set_current_focus(PanelId::Images);
        session.tick(&input, &mut surface, &mut NoopHooks).unwrap();

        session
            .register_popup(PanelId::Confirmation, Rect::new(30, 10, 90, 20))
            .unwrap();
        session.set_current_focus(PanelId::Confirmation);
        session.tick(&input, &mut surface, &mut NoopHooks).unwrap();
        assert_eq!(session.previous_focus(), Some(PanelId::Images));

        session
            .dismiss_popup(PanelId::Confirmation, &mut surface)
            .unwrap();
        assert_eq!(session.current_focus(), Some(PanelId::Images));
        assert!(!session.registry().contains(PanelId::Confirmation));
    }

    #[test]
    fn tick_input_routes_lists() {
        let input = TickInput::new(Size::new(80, 30))
            .with_list(PanelId::Images, ListState::new(2, 9))
            .with_list(PanelId::Main, ListState::new(1, 1));
        assert_eq!(input.images, ListState::new(2, 9));
        assert_eq!(input.services, ListState::default());
    }
}
