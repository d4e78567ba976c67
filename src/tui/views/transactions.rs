//! Session transactions view
//!
//! Lists what was recorded through the form since the app started.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_date;
use crate::models::TransactionType;
use crate::tui::app::App;

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let transactions = app.transactions();

    let block = Block::default()
        .title(format!(" Transactions ({}) ", transactions.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if transactions.is_empty() {
        let empty = Paragraph::new("No transactions yet. Press 'n' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let amount_color = match txn.kind {
                TransactionType::Income => Color::Green,
                TransactionType::Expense => Color::Red,
            };
            Row::new(vec![
                Cell::from(format_date(txn.date, &app.settings.date_format)),
                Cell::from(txn.kind.label()),
                Cell::from(txn.category.clone()),
                Cell::from(txn.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(amount_color)),
                Cell::from(txn.notes.clone().unwrap_or_default()),
            ])
        })
        .collect();

    let header = Row::new(vec!["Date", "Type", "Category", "Amount", "Notes"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(
        app.selected_transaction_index
            .min(transactions.len().saturating_sub(1)),
    ));
    frame.render_stateful_widget(table, area, &mut state);
}
