//! Screen layout definitions for the TUI
//!
//! Presentation mode drops the header and footer so the banner fills the
//! screen.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the draw screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (empty in presentation mode)
    pub header: Rect,

    /// Headline and displayed name
    pub banner: Rect,

    /// Start/Stop buttons
    pub controls: Rect,

    /// Key hints or notice (empty in presentation mode)
    pub footer: Rect,
}

/// Create the draw screen layout
pub fn create(area: Rect, presentation: bool) -> ScreenAreas {
    if presentation {
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(area);
        return ScreenAreas {
            header: Rect::default(),
            banner: chunks[0],
            controls: chunks[1],
            footer: Rect::default(),
        };
    }

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(5),    // Banner
        Constraint::Length(3), // Buttons
        Constraint::Length(1), // Hints
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        banner: chunks[1],
        controls: chunks[2],
        footer: chunks[3],
    }
}

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
