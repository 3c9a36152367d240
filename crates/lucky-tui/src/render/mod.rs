//! Main render/view function (View in TEA pattern)


use lucky_app::state::{AppState, UiMode};
use lucky_app::shell_model;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to state: everything shown is derived from the shell
/// model and the settings panel state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let model = shell_model(state);
    let areas = layout::create(area, model.fullscreen);

    if !model.fullscreen {
        frame.render_widget(
            widgets::MainHeader::new(model.title, model.phase, model.pool_size),
            areas.header,
        );
        frame.render_widget(
            widgets::Footer::new(state.notice.as_deref(), model.stop_visible),
            areas.footer,
        );
    }

    frame.render_widget(widgets::WinnerBanner::new(&model), areas.banner);
    frame.render_widget(widgets::Controls::new(&model), areas.controls);

    if state.ui_mode == UiMode::Settings {
        let panel = widgets::SettingsPanel::new(
            state.draw.names().raw(),
            &state.settings_panel,
            *state.draw.preferences(),
            model.pool_size,
        );
        frame.render_widget(panel, area);
    }
}
