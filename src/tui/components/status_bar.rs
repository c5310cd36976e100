//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.view();

    let (status, status_color) = if view.is_loading {
        (format!(" {} Refreshing ", app.spinner()), Color::Yellow)
    } else if view.error.is_some() {
        (" Error ".to_string(), Color::Red)
    } else {
        (" Live ".to_string(), Color::Green)
    };

    let updated = match app.last_update {
        Some(at) => format!(" updated {}s ago ", at.elapsed().as_secs()),
        None => " no data yet ".to_string(),
    };

    let spans = vec![
        Span::styled(status, Style::default().fg(status_color)),
        Span::raw("│"),
        Span::raw(format!(
            " every {}s ",
            app.refresh_interval.as_secs_f32()
        )),
        Span::raw("│"),
        Span::raw(updated),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", app.tracked_ids.join(", ")),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        Span::styled(" q quit ", Style::default().fg(Color::DarkGray)),
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
