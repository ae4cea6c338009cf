use crate::logging::{LogEvent, LogLevel, json_kv};
use serde_json::Value;

/// Counters accumulated by a layout session.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    ticks: u64,
    degraded_ticks: u64,
    panels_created: u64,
    panels_moved: u64,
    focus_transitions: u64,
    surface_flushes: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tick(&mut self, degraded: bool) {
        self.ticks = self.ticks.saturating_add(1);
        if degraded {
            self.degraded_ticks = self.degraded_ticks.saturating_add(1);
        }
    }

    pub fn record_created(&mut self) {
        self.panels_created = self.panels_created.saturating_add(1);
    }

    pub fn record_moved(&mut self) {
        self.panels_moved = self.panels_moved.saturating_add(1);
    }

    pub fn record_transition(&mut self) {
        self.focus_transitions = self.focus_transitions.saturating_add(1);
    }

    pub fn record_flush(&mut self, panels: usize) {
        self.surface_flushes = self.surface_flushes.saturating_add(panels as u64);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            ticks: self.ticks,
            degraded_ticks: self.degraded_ticks,
            panels_created: self.panels_created,
            panels_moved: self.panels_moved,
            focus_transitions: self.focus_transitions,
            surface_flushes: self.surface_flushes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub ticks: u64,
    pub degraded_ticks: u64,
    pub panels_created: u64,
    pub panels_moved: u64,
    pub focus_transitions: u64,
    pub surface_flushes: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> Vec<(String, Value)> {
        vec![
            json_kv("ticks", self.ticks),
            json_kv("degraded_ticks", self.degraded_ticks),
            json_kv("panels_created", self.panels_created),
            json_kv("panels_moved", self.panels_moved),
            json_kv("focus_transitions", self.focus_transitions),
            json_kv("surface_flushes", self.surface_flushes),
        ]
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }
}
