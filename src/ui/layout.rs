use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const CARD_MAX_WIDTH: u16 = 44;
pub const CARD_MAX_HEIGHT: u16 = 22;

pub struct MenuLayout {
    pub title_area: Rect,
    pub friends_area: Rect,
    pub couples_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct GameLayout {
    pub back_area: Rect,
    pub card_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let choices = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    MenuLayout {
        title_area: chunks[0],
        friends_area: choices[0],
        couples_area: choices[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_game_chunks(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    GameLayout {
        back_area: chunks[0],
        card_area: chunks[1],
        help_area: chunks[2],
    }
}

/// Card rectangle centred in `area`, squeezed horizontally by
/// `width_factor` while flipping.
pub fn card_rect(area: Rect, width_factor: f32) -> Rect {
    let full_width = area.width.min(CARD_MAX_WIDTH);
    let height = area.height.min(CARD_MAX_HEIGHT);

    let factor = width_factor.clamp(0.0, 1.0);
    let width = ((full_width as f32 * factor).round() as u16)
        .max(2)
        .min(full_width);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
