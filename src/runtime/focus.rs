use crate::error::Result;
use crate::logging::{FOCUS_TARGET, LogLevel, Logger, json_kv};
use crate::panel::PanelId;
use crate::registry::PanelRegistry;

/// A real focus transition between two non-popup panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTransition {
    pub from: Option<PanelId>,
    pub to: PanelId,
}

/// Receives focus transitions. Both hooks default to doing nothing; the
/// tracker logs every transition before calling them.
pub trait FocusObserver {
    fn on_focus_lost(&mut self, _panel: PanelId) -> Result<()> {
        Ok(())
    }

    fn on_focus(&mut self, _panel: PanelId) -> Result<()> {
        Ok(())
    }
}

/// Remembers which non-popup panel last held focus.
///
/// Popups borrow input focus without becoming `previous`, so closing one does
/// not register as a transition back.
#[derive(Default)]
pub struct FocusTracker {
    previous: Option<PanelId>,
    logger: Option<Logger>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn previous(&self) -> Option<PanelId> {
        self.previous
    }

    /// Recompute every panel's highlight flag from the focused panel.
    pub fn highlight(&self, registry: &mut PanelRegistry, current: Option<PanelId>) {
        registry.apply_highlight(current);
    }

    /// Fire lost/gained when focus moved to a different non-popup panel.
    ///
    /// `previous` is only updated once both hooks succeeded.
    pub fn observe<O>(
        &mut self,
        current: Option<PanelId>,
        observer: &mut O,
    ) -> Result<Option<FocusTransition>>
    where
        O: FocusObserver + ?Sized,
    {
        let Some(next) = current else {
            return Ok(None);
        };
        if Some(next) == self.previous || next.is_popup() {
            return Ok(None);
        }

        let from = self.previous;
        if let Some(lost) = from {
            self.emit(lost, "focus lost");
            observer.on_focus_lost(lost)?;
        }
        self.emit(next, "focus gained");
        observer.on_focus(next)?;

        self.previous = Some(next);
        Ok(Some(FocusTransition { from, to: next }))
    }

    fn emit(&self, panel: PanelId, what: &str) {
        if let Some(logger) = self.logger.as_ref() {
            let _ = logger.log_with_fields(
                LogLevel::Info,
                FOCUS_TARGET,
                &format!("{panel} {what}"),
                [json_kv("panel", panel.name())],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::logging::MemorySink;
    use std::sync::Arc;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl FocusObserver for Recorder {
        fn on_focus_lost(&mut self, panel: PanelId) -> Result<()> {
            self.calls.push(format!("lost:{panel}"));
            Ok(())
        }

        fn on_focus(&mut self, panel: PanelId) -> Result<()> {
            self.calls.push(format!("gained:{panel}"));
            Ok(())
        }
    }

    #[test]
    fn no_focus_is_not_a_transition() {
        let mut tracker = FocusTracker::new();
        let mut recorder = Recorder::default();
        assert_eq!(tracker.observe(None, &mut recorder).unwrap(), None);
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn first_focus_only_gains() {
        let mut tracker = FocusTracker::new();
        let mut recorder = Recorder::default();
        let transition = tracker
            .observe(Some(PanelId::Services), &mut recorder)
            .unwrap();
        assert_eq!(
            transition,
            Some(FocusTransition {
                from: None,
                to: PanelId::Services
            })
        );
        assert_eq!(recorder.calls, vec!["gained:services"]);
    }

    #[test]
    fn switch_fires_lost_before_gained_once() {
        let mut tracker = FocusTracker::new();
        let mut recorder = Recorder::default();
        tracker
            .observe(Some(PanelId::Services), &mut recorder)
            .unwrap();
        recorder.calls.clear();

        tracker.observe(Some(PanelId::Images), &mut recorder).unwrap();
        tracker.observe(Some(PanelId::Images), &mut recorder).unwrap();
        assert_eq!(recorder.calls, vec!["lost:services", "gained:images"]);
        assert_eq!(tracker.previous(), Some(PanelId::Images));
    }

    #[test]
    fn popup_focus_is_suppressed() {
        let mut tracker = FocusTracker::new();
        let mut recorder = Recorder::default();
        tracker
            .observe(Some(PanelId::Containers), &mut recorder)
            .unwrap();
        recorder.calls.clear();

        for popup in [PanelId::Menu, PanelId::Confirmation] {
            assert_eq!(tracker.observe(Some(popup), &mut recorder).unwrap(), None);
        }
        assert!(recorder.calls.is_empty());
        assert_eq!(tracker.previous(), Some(PanelId::Containers));

        // Returning from the popup is not a transition either.
        assert_eq!(
            tracker
                .observe(Some(PanelId::Containers), &mut recorder)
                .unwrap(),
            None
        );
    }

    #[test]
    fn failed_hook_keeps_previous() {
        struct Failing;
        impl FocusObserver for Failing {
            fn on_focus(&mut self, _panel: PanelId) -> Result<()> {
                Err(crate::LayoutError::Hook("refresh failed".into()))
            }
        }

        let mut tracker = FocusTracker::new();
        assert!(tracker.observe(Some(PanelId::Images), &mut Failing).is_err());
        assert_eq!(tracker.previous(), None);
    }

    #[test]
    fn transitions_are_logged() {
        let sink = Arc::new(MemorySink::new());
        let mut tracker = FocusTracker::new().with_logger(Logger::from_shared(sink.clone()));
        let mut recorder = Recorder::default();
        tracker
            .observe(Some(PanelId::Services), &mut recorder)
            .unwrap();
        tracker.observe(Some(PanelId::Main), &mut recorder).unwrap();
        assert_eq!(
            sink.messages(),
            vec![
                "services focus gained",
                "services focus lost",
                "main focus gained"
            ]
        );
    }

    #[test]
    fn highlight_marks_only_focused_panel() {
        let mut registry = PanelRegistry::new();
        registry.materialize(PanelId::Services, Rect::new(0, 0, 5, 5));
        registry.materialize(PanelId::Menu, Rect::new(2, 2, 8, 8));
        FocusTracker::new().highlight(&mut registry, Some(PanelId::Menu));
        assert!(registry.get(PanelId::Menu).unwrap().highlighted);
        assert!(!registry.get(PanelId::Services).unwrap().highlighted);
    }
}
