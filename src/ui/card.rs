use super::{category_color, key_hint};
use crate::animation::Face;
use crate::game::{CardState, GameSession};
use crate::models::Category;
use crate::ui::layout::{calculate_game_chunks, card_rect};
use crate::utils::{spinner_frame, vertical_padding, wrapped_line_count};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

pub const LOADING_TEXT: &str = "Meracik pertanyaan...";
pub const FRONT_HINT: &str = "Tekan spasi untuk membuka kartu";

fn card_block(category: Category) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(category_color(category)))
}

fn draw_front(f: &mut Frame, area: Rect, category: Category) {
    let color = category_color(category);
    let block = card_block(category);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            category.label().to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(FRONT_HINT, Style::default().fg(Color::Gray))),
    ];
    let pad = vertical_padding(lines.len(), inner.height);
    let mut padded = vec![Line::from(""); pad as usize];
    padded.extend(lines);

    f.render_widget(
        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn draw_back(f: &mut Frame, area: Rect, session: &GameSession, category: Category, now: Instant) {
    let color = category_color(category);
    let block = card_block(category);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let spinner = session
        .pending_since
        .map(|since| spinner_frame(now.saturating_duration_since(since)));

    match (&session.question, spinner) {
        (None, Some(frame)) => {
            let lines = vec![
                Line::from(Span::styled(frame, Style::default().fg(color))),
                Line::from(""),
                Line::from(LOADING_TEXT),
            ];
            let pad = vertical_padding(lines.len(), rows[0].height);
            let mut padded = vec![Line::from(""); pad as usize];
            padded.extend(lines);
            f.render_widget(Paragraph::new(padded).alignment(Alignment::Center), rows[0]);
        }
        (Some(question), _) => {
            let quoted = format!("\"{}\"", question);
            let style = if session.card_state == CardState::Pending {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            let text_lines = wrapped_line_count(&quoted, rows[0].width as usize);
            let pad = vertical_padding(text_lines, rows[0].height);
            let mut lines = vec![Line::from(""); pad as usize];
            lines.push(Line::from(Span::styled(quoted, style)));
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                rows[0],
            );
        }
        (None, None) => {}
    }

    let footer = match spinner {
        Some(frame) if session.question.is_some() => Line::from(Span::styled(
            format!("{} {}", frame, LOADING_TEXT),
            Style::default().fg(color),
        )),
        _ if session.card_state == CardState::Shown => Line::from(Span::styled(
            "Enter: Pertanyaan Lain",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        _ => Line::from(""),
    };
    f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[1]);
}

pub fn draw_game(f: &mut Frame, session: &GameSession, source_label: &str, now: Instant) {
    let Some(category) = session.category else {
        return;
    };
    let layout = calculate_game_chunks(f.area());

    let back = Paragraph::new(Span::styled(
        "← Ganti Mode (Esc)",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(back, layout.back_area);

    let card_area = card_rect(layout.card_area, session.card_width_factor(now));
    f.render_widget(Clear, card_area);
    match session.visible_face(now) {
        Face::Front => draw_front(f, card_area, category),
        Face::Back => draw_back(f, card_area, session, category, now),
    }

    let mut spans = match session.card_state {
        CardState::Hidden => key_hint("Spasi/Enter", " Buka kartu  "),
        CardState::Pending => vec![Span::styled(
            "Menunggu...  ",
            Style::default().fg(Color::DarkGray),
        )],
        CardState::Shown => key_hint("Spasi/Enter/r", " Pertanyaan lain  "),
    };
    spans.extend(key_hint("Esc", " Ganti mode  "));
    spans.extend(key_hint("q", " Keluar"));

    let help = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!("Powered by {}", source_label),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(help, layout.help_area);
}
