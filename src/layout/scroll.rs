//! Scroll window arithmetic for list panels.
//!
//! A list panel shows `viewport_height` rows starting at its scroll offset.
//! [`focus_point`] moves that offset as little as possible so the selected row
//! stays on screen, and never scrolls past the last full page.

use crate::panel::ListState;

/// Selection and viewport of one list panel for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    pub selected_line: usize,
    pub line_count: usize,
    pub viewport_height: usize,
}

impl ScrollWindow {
    pub fn new(list: ListState, viewport_height: usize) -> Self {
        Self {
            selected_line: list.selected_line,
            line_count: list.line_count,
            viewport_height,
        }
    }

    /// Offset that keeps the selection visible, starting from `current`.
    pub fn offset_from(&self, current: usize) -> usize {
        focus_point(
            current,
            self.selected_line,
            self.line_count,
            self.viewport_height,
        )
    }
}

/// Compute the scroll offset that keeps `selected_line` inside the viewport.
pub fn focus_point(
    offset: usize,
    selected_line: usize,
    line_count: usize,
    viewport_height: usize,
) -> usize {
    if line_count == 0 {
        return 0;
    }

    // A collapsed panel still shows its selected row.
    let viewport = viewport_height.max(1);
    let selected = selected_line.min(line_count - 1);

    let mut offset = offset;
    if selected < offset {
        offset = selected;
    } else if selected >= offset + viewport {
        offset = selected + 1 - viewport;
    }

    offset.min(line_count.saturating_sub(viewport))
}
