//! Status bar view
//!
//! Shows the session count, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Session: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{} txn", app.transaction_count()),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(app: &App) -> &'static str {
    if app.alert.is_some() {
        return " Enter/Esc:Dismiss ";
    }
    if app.has_dialog() {
        return " Tab:Next field  Enter:Add  Esc:Close ";
    }
    if app.category_manager.is_editing() {
        return " Enter:Save  Esc:Cancel ";
    }
    match (app.active_view, app.input_mode) {
        (ActiveView::Categories, InputMode::Editing) => " Enter:Add  Esc:Done ",
        _ => " 1/2:View  n:New txn  q:Quit ",
    }
}
