//! Header bar widget
//!
//! Shows the app title and the size of the current pool.

use lucky_core::DrawPhase;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the title, draw phase and pool size
pub struct MainHeader<'a> {
    title: &'a str,
    phase: DrawPhase,
    pool_size: usize,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, phase: DrawPhase, pool_size: usize) -> Self {
        Self {
            title,
            phase,
            pool_size,
        }
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            DrawPhase::Idle => "ready",
            DrawPhase::Running => "drawing",
            DrawPhase::Stopped => "winner drawn",
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.title, styles::accent_bold()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(self.phase_label(), styles::text_secondary()),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let names = match self.pool_size {
            1 => "1 name ".to_string(),
            n => format!("{} names ", n),
        };
        let width = names.chars().count() as u16;
        if width < inner.width {
            buf.set_string(
                inner.right() - width,
                inner.y,
                names,
                styles::text_secondary(),
            );
        }
    }
}
