use std::fmt;

use crossterm::style::Color;

use crate::geometry::Rect;

/// Fixed set of panels known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelId {
    Status,
    Services,
    Containers,
    Images,
    Main,
    Options,
    AppStatus,
    Information,
    Limit,
    Menu,
    Confirmation,
}

/// How a panel participates in layout and focus tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCategory {
    /// Left column, stacked top to bottom.
    Stacked,
    /// Right-hand detail pane.
    Main,
    /// Frameless zone of the bottom strip.
    Strip,
    /// Borrows input focus without altering focus history.
    Popup,
    /// Shown alone when the terminal is too small.
    Placeholder,
}

/// Panels eligible for size priority, in cycling order.
pub const CYCLABLE_PANELS: [PanelId; 4] = [
    PanelId::Status,
    PanelId::Services,
    PanelId::Containers,
    PanelId::Images,
];

/// Left column, top to bottom.
pub const STACKED_PANELS: [PanelId; 4] = CYCLABLE_PANELS;

impl PanelId {
    pub const fn name(self) -> &'static str {
        match self {
            PanelId::Status => "status",
            PanelId::Services => "services",
            PanelId::Containers => "containers",
            PanelId::Images => "images",
            PanelId::Main => "main",
            PanelId::Options => "options",
            PanelId::AppStatus => "appStatus",
            PanelId::Information => "information",
            PanelId::Limit => "limit",
            PanelId::Menu => "menu",
            PanelId::Confirmation => "confirmation",
        }
    }

    pub const fn category(self) -> PanelCategory {
        match self {
            PanelId::Status | PanelId::Services | PanelId::Containers | PanelId::Images => {
                PanelCategory::Stacked
            }
            PanelId::Main => PanelCategory::Main,
            PanelId::Options | PanelId::AppStatus | PanelId::Information => PanelCategory::Strip,
            PanelId::Menu | PanelId::Confirmation => PanelCategory::Popup,
            PanelId::Limit => PanelCategory::Placeholder,
        }
    }

    pub const fn is_popup(self) -> bool {
        matches!(self.category(), PanelCategory::Popup)
    }

    pub fn is_cyclable(self) -> bool {
        CYCLABLE_PANELS.contains(&self)
    }

    /// Panels that render a selectable list and need a scroll window.
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            PanelId::Services | PanelId::Containers | PanelId::Images | PanelId::Menu
        )
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stacking order on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ZOrder {
    Bottom,
    #[default]
    Normal,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub fg: Color,
    pub bg: Color,
    pub frame: bool,
    pub wrap: bool,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            frame: true,
            wrap: false,
        }
    }
}

/// Live selection of a list panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListState {
    pub selected_line: usize,
    pub line_count: usize,
}

impl ListState {
    pub const fn new(selected_line: usize, line_count: usize) -> Self {
        Self {
            selected_line,
            line_count,
        }
    }
}

/// Materialized panel as tracked by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub rect: Rect,
    pub z: ZOrder,
    pub title: Option<String>,
    pub style: PanelStyle,
    pub highlighted: bool,
    pub content: Option<String>,
    pub list: Option<ListState>,
    pub scroll_offset: usize,
}

impl Panel {
    pub fn new(id: PanelId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            z: ZOrder::Normal,
            title: None,
            style: PanelStyle::default(),
            highlighted: false,
            content: None,
            list: id.is_list().then(ListState::default),
            scroll_offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popups_are_tagged_by_category() {
        assert!(PanelId::Menu.is_popup());
        assert!(PanelId::Confirmation.is_popup());
        assert!(!PanelId::Services.is_popup());
        assert!(!PanelId::Limit.is_popup());
    }

    #[test]
    fn cyclable_set_is_the_left_column() {
        for id in CYCLABLE_PANELS {
            assert_eq!(id.category(), PanelCategory::Stacked);
        }
        assert!(!PanelId::Main.is_cyclable());
        assert!(!PanelId::Menu.is_cyclable());
    }

    #[test]
    fn list_panels_start_with_empty_selection() {
        let panel = Panel::new(PanelId::Images, Rect::new(0, 0, 5, 5));
        assert_eq!(panel.list, Some(ListState::default()));
        assert!(Panel::new(PanelId::Main, Rect::new(0, 0, 5, 5)).list.is_none());
    }

    #[test]
    fn names_match_surface_identifiers() {
        assert_eq!(PanelId::AppStatus.to_string(), "appStatus");
        assert_eq!(PanelId::Information.name(), "information");
    }
}
