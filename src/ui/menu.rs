use super::{category_color, key_hint};
use crate::models::Category;
use crate::ui::layout::calculate_menu_chunks;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const SUBTITLE: &str =
    "Temukan topik obrolan seru untuk mencairkan suasana atau memperdalam hubungan.";

fn draw_choice(f: &mut Frame, area: Rect, category: Category, index: usize, selected: bool) {
    let color = category_color(category);
    let border_style = if selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label_style = if selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..inner_height.saturating_sub(3) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(category.label(), label_style)));
    lines.push(Line::from(Span::styled(
        category.tagline(),
        Style::default().fg(color),
    )));
    lines.push(Line::from(Span::styled(
        format!("[{}]", index),
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style),
    );
    f.render_widget(panel, area);
}

pub fn draw_menu(f: &mut Frame, selected: Category, source_label: &str) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "KARTU KATA",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    draw_choice(
        f,
        layout.friends_area,
        Category::Friends,
        1,
        selected == Category::Friends,
    );
    draw_choice(
        f,
        layout.couples_area,
        Category::Couples,
        2,
        selected == Category::Couples,
    );

    let status = Paragraph::new(format!("Mode: {}", source_label))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(status, layout.status_area);

    let mut spans = key_hint("←/→", " Pilih  ");
    spans.extend(key_hint("1/2", " Langsung  "));
    spans.extend(key_hint("Enter", " Mulai  "));
    spans.extend(key_hint("q/Esc", " Keluar"));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
