//! Start/Stop button row

use lucky_app::ShellModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Button row. Stop only appears for manual draws.
pub struct Controls {
    start_enabled: bool,
    stop_visible: bool,
    stop_enabled: bool,
}

impl Controls {
    pub fn new(model: &ShellModel<'_>) -> Self {
        Self {
            start_enabled: model.start_enabled,
            stop_visible: model.stop_visible,
            stop_enabled: model.stop_enabled,
        }
    }
}

impl Widget for Controls {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("  Start  ", styles::button(self.start_enabled))];
        if self.stop_visible {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("  Stop  ", styles::button(self.stop_enabled)));
        }

        Paragraph::new(Line::from(spans).centered()).render(inner, buf);
    }
}
