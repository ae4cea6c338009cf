use std::collections::HashMap;

use crate::geometry::{Rect, Size};
use crate::panel::{PanelId, STACKED_PANELS};
use crate::width::display_width;

/// Narrowest frame that still gets a real layout.
pub const MIN_WIDTH: u16 = 10;
/// Shortest frame that still gets a real layout.
pub const MIN_HEIGHT: u16 = 9;
/// Below this height the left column collapses around the priority panel.
pub const COMPACT_HEIGHT: u16 = 28;
/// Below this height collapsed panels shrink to a single line.
pub const TINY_HEIGHT: u16 = 21;

const STATUS_HEIGHT: i32 = 3;
const TALL_PANELS: i32 = 3;
const RESERVED_ROWS: i32 = 4;

/// Which branch of the solver produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Only the placeholder panel is shown.
    Degraded,
    /// Every stacked panel but the priority one is `minimal` rows tall.
    Compact { minimal: i32 },
    /// Usable rows are split evenly between the tall panels.
    Full,
}

/// Column boundaries between the three bottom strip zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomStrip {
    /// Right edge of the app status zone; 0 when there is no status text.
    pub app_status_boundary: i32,
    /// Left edge of the information zone holding the version string.
    pub options_version_boundary: i32,
}

impl BottomStrip {
    fn measure(width: i32, status_text: &str, version: &str) -> Self {
        let app_status_boundary = if status_text.is_empty() {
            0
        } else {
            display_width(status_text) as i32 + 2
        };
        let version_width = (display_width(version) as i32).max(1);
        Self {
            app_status_boundary,
            options_version_boundary: (width - version_width).max(1),
        }
    }

    pub fn app_status_width(&self) -> i32 {
        self.app_status_boundary
    }
}

/// Rectangles for one tick, keyed by panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedLayout {
    mode: LayoutMode,
    rects: HashMap<PanelId, Rect>,
    strip: Option<BottomStrip>,
}

impl SolvedLayout {
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn is_degraded(&self) -> bool {
        self.mode == LayoutMode::Degraded
    }

    pub fn rect(&self, id: PanelId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    pub fn strip(&self) -> Option<BottomStrip> {
        self.strip
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Heights of the left column, top to bottom. Empty when degraded.
    pub fn stacked_heights(&self) -> Vec<i32> {
        STACKED_PANELS
            .iter()
            .filter_map(|id| self.rect(*id))
            .map(|rect| rect.height())
            .collect()
    }
}

pub fn is_too_small(frame: Size) -> bool {
    frame.height < MIN_HEIGHT || frame.width < MIN_WIDTH
}

/// Pick the panel that gets size priority.
///
/// A focused cyclable panel wins; anything else (popups, main, nothing at all)
/// keeps the last remembered one so the layout does not jump.
pub fn resolve_priority(focused: Option<PanelId>, remembered: PanelId) -> PanelId {
    match focused {
        Some(id) if id.is_cyclable() => id,
        _ => remembered,
    }
}

/// Solve the dashboard layout for a terminal frame.
pub fn solve(frame: Size, priority: PanelId, status_text: &str, version: &str) -> SolvedLayout {
    let width = i32::from(frame.width);
    let height = i32::from(frame.height);

    if is_too_small(frame) {
        let mut rects = HashMap::with_capacity(1);
        rects.insert(PanelId::Limit, Rect::new(0, 0, width - 1, height - 1));
        return SolvedLayout {
            mode: LayoutMode::Degraded,
            rects,
            strip: None,
        };
    }

    let (mode, heights) = stacked_heights(height, priority);
    let left = width / 3;
    let mut rects = HashMap::with_capacity(8);

    rects.insert(PanelId::Main, Rect::new(left + 1, 0, width - 1, height - 2));

    let mut above = Rect::new(0, 0, left, heights[0] - 1);
    rects.insert(STACKED_PANELS[0], above);
    for (id, rows) in STACKED_PANELS.iter().zip(heights).skip(1) {
        above = Rect::beneath(above, rows);
        rects.insert(*id, above);
    }

    let strip = BottomStrip::measure(width, status_text, version);
    let row = height - 2;
    rects.insert(
        PanelId::AppStatus,
        Rect::new(-1, row, strip.app_status_boundary - 1, height),
    );
    rects.insert(
        PanelId::Options,
        Rect::new(
            strip.app_status_boundary - 1,
            row,
            strip.options_version_boundary - 1,
            height,
        ),
    );
    rects.insert(
        PanelId::Information,
        Rect::new(strip.options_version_boundary - 1, row, width, height),
    );

    SolvedLayout {
        mode,
        rects,
        strip: Some(strip),
    }
}

fn stacked_heights(height: i32, priority: PanelId) -> (LayoutMode, [i32; 4]) {
    if height < i32::from(COMPACT_HEIGHT) {
        let minimal = if height < i32::from(TINY_HEIGHT) { 1 } else { 3 };
        let mut heights = [minimal; 4];
        if let Some(slot) = STACKED_PANELS.iter().position(|id| *id == priority) {
            heights[slot] = height - minimal * TALL_PANELS - 1;
        }
        return (LayoutMode::Compact { minimal }, heights);
    }

    let usable = height - RESERVED_ROWS;
    let share = usable / TALL_PANELS;
    (
        LayoutMode::Full,
        [STATUS_HEIGHT, share + usable % TALL_PANELS, share, share],
    )
}
