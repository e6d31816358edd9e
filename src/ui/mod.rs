pub mod card;
pub mod layout;
mod menu;

pub use card::draw_game;
pub use layout::{calculate_game_chunks, calculate_menu_chunks, card_rect};
pub use menu::draw_menu;

use crate::app::App;
use crate::models::{AppState, Category};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};
use std::time::Instant;

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Friends => Color::LightGreen,
        Category::Couples => Color::LightMagenta,
    }
}

fn key_hint(key: &'static str, action: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(action),
    ]
}

pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let source = app.source_label();
    match app.state {
        AppState::Menu => draw_menu(f, app.menu_choice, &source),
        AppState::Playing => draw_game(f, &app.session, &source, now),
    }
}
