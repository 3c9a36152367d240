//! Winner banner: the headline and the name currently on display

use lucky_app::ShellModel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct WinnerBanner<'a> {
    model: &'a ShellModel<'a>,
}

impl<'a> WinnerBanner<'a> {
    pub fn new(model: &'a ShellModel<'a>) -> Self {
        Self { model }
    }
}

impl Widget for WinnerBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.model.fullscreen)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 {
            // Not enough room for spacing, show just the name
            Paragraph::new(Line::from(self.model.display_text).centered())
                .style(styles::candidate(self.model.phase, self.model.is_placeholder))
                .render(inner, buf);
            return;
        }

        let [_, headline, _, name, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(self.model.headline).centered())
            .style(styles::text_secondary())
            .render(headline, buf);

        Paragraph::new(Line::from(self.model.display_text).centered())
            .style(styles::candidate(self.model.phase, self.model.is_placeholder))
            .render(name, buf);
    }
}
