//! Card showing one tracked asset.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format::{change_label, is_negative, price_label};
use crate::models::AssetRecord;

/// Rows a card needs, borders included.
pub const CARD_HEIGHT: u16 = 5;

/// Renders a single asset card.
pub fn render(frame: &mut Frame, area: Rect, record: &AssetRecord) {
    let change = record.change_percent_24hr.as_deref();
    let change_color = if is_negative(change) {
        Color::Red
    } else {
        Color::Cyan
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Rank: {}", record.rank),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            price_label(record.price_usd.as_deref()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            change_label(change),
            Style::default().fg(change_color),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", record.name));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
