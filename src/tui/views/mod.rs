//! TUI Views module
//!
//! Contains the category manager, the session transactions list and the
//! status bar, plus the top-level render entry point.

pub mod categories;
pub mod status_bar;
pub mod transactions;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{notification_rect, AppLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Categories => categories::render(frame, app, layout.main),
        ActiveView::Transactions => transactions::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(ref message) = app.alert {
        dialogs::alert::render(frame, message);
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(notification, notification_rect(36, 4, frame.area()));
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{}:{}", i + 1, view.title())))
        .collect();
    let selected = ActiveView::ALL
        .iter()
        .position(|v| *v == app.active_view)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Tally ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
