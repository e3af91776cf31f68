mod home;
mod loading;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;
use crate::session::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Home => home::render(frame, area, app),
        AppState::Quiz => match app.session().phase() {
            Phase::Loading => loading::render(frame, area),
            _ if app.session().results_visible() => result::render(frame, area, app),
            _ => quiz::render(frame, area, app),
        },
    }
}

/// Letter label for an option index: A, B, C, ...
pub(crate) fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map(char::from)
        .unwrap_or('?')
}
