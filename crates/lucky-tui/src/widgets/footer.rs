//! Footer line: key hints, or a notice when one is pending

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Footer<'a> {
    notice: Option<&'a str>,
    stop_visible: bool,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a str>, stop_visible: bool) -> Self {
        Self {
            notice,
            stop_visible,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(notice) = self.notice {
            Paragraph::new(Line::from(Span::styled(notice, styles::status_red())).centered())
                .render(area, buf);
            return;
        }

        let draw_hint = if self.stop_visible {
            " start/stop  "
        } else {
            " start  "
        };
        let hints = [
            ("Space", draw_hint),
            ("o", " settings  "),
            ("f", " fullscreen  "),
            ("q", " quit"),
        ];
        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, styles::keybinding()),
                    Span::styled(*label, styles::text_muted()),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans).centered()).render(area, buf);
    }
}
