//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::App;
use super::components::asset_card::{self, CARD_HEIGHT};
use super::components::status_bar;
use crate::models::AssetRecord;

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Status bar
            Constraint::Min(3),    // Cards
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "CoinTracker",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, main_layout[0]);

    status_bar::render(frame, main_layout[1], app);

    let view = app.state.view();
    if view.is_loading {
        let text = format!("{} Loading...", app.spinner());
        render_centered(frame, main_layout[2], text, Color::Yellow);
    } else if let Some(error) = view.error {
        render_centered(frame, main_layout[2], error.to_string(), Color::Red);
    } else if view.items.is_empty() {
        let text = "No tracked assets in the latest snapshot".to_string();
        render_centered(frame, main_layout[2], text, Color::DarkGray);
    } else {
        render_cards(frame, main_layout[2], view.items);
    }
}

/// Number of card columns that fit in `width`.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..60 => 1,
        60..100 => 2,
        _ => 3,
    }
}

/// Lays the cards out in a grid, row by row in snapshot order.
fn render_cards(frame: &mut Frame, area: Rect, items: &[AssetRecord]) {
    let columns = columns_for_width(area.width);
    let rows: Vec<&[AssetRecord]> = items.chunks(columns).collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);

        for (record, cell) in row.iter().zip(cells.iter()) {
            asset_card::render(frame, *cell, record);
        }
    }
}

fn render_centered(frame: &mut Frame, area: Rect, text: String, color: Color) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let para = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .alignment(Alignment::Center);
    frame.render_widget(para, vertical[1]);
}
