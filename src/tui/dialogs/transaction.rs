//! Transaction entry dialog
//!
//! Collects a new income or expense and hands it to the `on_add` callback
//! supplied by the owner. The form never stores transactions itself.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{info, warn};

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::{Notification, TextInput};

/// Shown when amount, date or category is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

const LABEL_WIDTH: usize = 10;

/// Callback receiving each successfully submitted transaction
pub type OnAddTransaction = Box<dyn FnMut(Transaction)>;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Type,
    Amount,
    Date,
    Category,
    Notes,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Type => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Notes,
            Self::Notes => Self::Type,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Type => Self::Notes,
            Self::Amount => Self::Type,
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Notes => Self::Category,
        }
    }
}

/// State of the transaction form
pub struct TransactionForm {
    kind: TransactionType,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    /// Index into `kind.form_categories()`
    category: Option<usize>,
    pub notes_input: TextInput,
    pub focused_field: FormField,
    on_add: OnAddTransaction,
}

impl TransactionForm {
    /// Create an empty form reporting submissions to `on_add`
    pub fn new(on_add: impl FnMut(Transaction) + 'static) -> Self {
        let mut form = Self {
            kind: TransactionType::default(),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
            category: None,
            notes_input: TextInput::new()
                .label("Notes")
                .placeholder("Optional"),
            focused_field: FormField::Type,
            on_add: Box::new(on_add),
        };
        form.update_focus();
        form
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    /// Change the type; the chosen category no longer applies and is cleared
    pub fn set_type(&mut self, kind: TransactionType) {
        self.kind = kind;
        self.category = None;
    }

    pub fn toggle_type(&mut self) {
        self.set_type(self.kind.toggle());
    }

    /// Options for the current type
    pub fn category_options(&self) -> &'static [&'static str] {
        self.kind.form_categories()
    }

    /// The chosen category, if any
    pub fn category(&self) -> Option<&'static str> {
        self.category
            .and_then(|i| self.category_options().get(i).copied())
    }

    /// Choose a category by name; returns false if it is not an option
    pub fn select_category(&mut self, name: &str) -> bool {
        match self.category_options().iter().position(|c| *c == name) {
            Some(index) => {
                self.category = Some(index);
                true
            }
            None => false,
        }
    }

    /// Cycle forward through "no selection" and the options
    pub fn next_category(&mut self) {
        let count = self.category_options().len();
        self.category = match self.category {
            None if count > 0 => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            _ => None,
        };
    }

    /// Cycle backward through "no selection" and the options
    pub fn prev_category(&mut self) {
        let count = self.category_options().len();
        self.category = match self.category {
            None => count.checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == FormField::Amount;
        self.date_input.focused = self.focused_field == FormField::Date;
        self.notes_input.focused = self.focused_field == FormField::Notes;
    }

    /// The focused text input, if the focused field takes text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Date => Some(&mut self.date_input),
            FormField::Notes => Some(&mut self.notes_input),
            FormField::Type | FormField::Category => None,
        }
    }

    /// Check the form and return the parsed amount, date and category
    pub fn validate(&self) -> TallyResult<(Money, NaiveDate, &'static str)> {
        // Unparseable counts as unset
        let amount = Money::parse(self.amount_input.value())
            .ok()
            .filter(|m| !m.is_zero());
        let date_text = self.date_input.value().trim();

        let (amount, category) = match (amount, self.category()) {
            (Some(amount), Some(category)) if !date_text.is_empty() => (amount, category),
            _ => return Err(TallyError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        };

        if amount.is_negative() {
            return Err(TallyError::Validation("Amount cannot be negative".into()));
        }
        if amount > Money::MAX_ENTRY {
            return Err(TallyError::Validation(format!(
                "Amount cannot exceed {}",
                Money::MAX_ENTRY
            )));
        }

        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| TallyError::Validation("Invalid date format. Use YYYY-MM-DD".into()))?;

        Ok((amount, date, category))
    }

    /// Validate, emit the transaction to `on_add`, then clear the fields
    ///
    /// On error nothing is emitted and the fields keep their values.
    pub fn submit(&mut self) -> TallyResult<TransactionId> {
        let (amount, date, category) = self.validate()?;
        let txn = Transaction::new(self.kind, amount, date, category, self.notes_input.value());
        let id = txn.id.clone();

        info!(id = %id, kind = %txn.kind, amount = %txn.amount, category, "transaction added");
        (self.on_add)(txn);
        self.reset();

        Ok(id)
    }

    /// Clear amount, date, category and notes; the type is kept
    pub fn reset(&mut self) {
        self.amount_input.clear();
        self.date_input.clear();
        self.category = None;
        self.notes_input.clear();
    }
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.transaction_form;
    let area = centered_rect(60, 60, frame.area());

    frame.render_widget(Clear, area);

    let title = format!(" Add {} ", form.kind().label());
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Notes
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let type_line = selector_line(
        "Type",
        form.focused_field == FormField::Type,
        TransactionType::ALL
            .iter()
            .map(|t| (t.label().to_string(), *t == form.kind()))
            .collect(),
    );
    frame.render_widget(Paragraph::new(type_line), chunks[0]);

    let mut amount_spans = form.amount_input.spans(LABEL_WIDTH);
    amount_spans.push(Span::styled(
        format!(" ({})", app.settings.currency_symbol),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(amount_spans)), chunks[1]);
    frame.render_widget(
        Paragraph::new(Line::from(form.date_input.spans(LABEL_WIDTH))),
        chunks[2],
    );

    let category_focused = form.focused_field == FormField::Category;
    let category_text = form.category().unwrap_or("Select category");
    let category_style = match (category_focused, form.category().is_some()) {
        (true, _) => Style::default().fg(Color::Black).bg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Yellow),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let category_line = Line::from(vec![
        field_label("Category", category_focused),
        Span::styled(format!("< {} >", category_text), category_style),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[3]);

    frame.render_widget(
        Paragraph::new(Line::from(form.notes_input.spans(LABEL_WIDTH))),
        chunks[4],
    );

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>width$}: ", label, width = LABEL_WIDTH), style)
}

fn selector_line(label: &str, focused: bool, options: Vec<(String, bool)>) -> Line<'static> {
    let mut spans = vec![field_label(label, focused)];
    for (name, selected) in options {
        let style = match (selected, focused) {
            (true, true) => Style::default().fg(Color::Black).bg(Color::Cyan),
            (true, false) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", name), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Handle key input for the transaction dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            submit(app);
            return true;
        }

        _ => {}
    }

    match form.focused_field {
        FormField::Type => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                form.toggle_type();
                true
            }
            _ => false,
        },
        FormField::Category => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                form.next_category();
                true
            }
            KeyCode::Left | KeyCode::Up => {
                form.prev_category();
                true
            }
            _ => false,
        },
        FormField::Amount | FormField::Date | FormField::Notes => {
            let Some(input) = form.focused_input() else {
                return false;
            };
            match key.code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => return false,
            }
            true
        }
    }
}

fn submit(app: &mut App) {
    match app.transaction_form.submit() {
        Ok(_) => {
            app.close_dialog();
            app.notify(Notification::success("Transaction added"));
            app.set_status(format!("{} transaction(s) this session", app.transaction_count()));
        }
        Err(e) => {
            warn!(error = %e, "transaction rejected");
            app.show_alert(e.user_message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn form_with_sink() -> (TransactionForm, Rc<RefCell<Vec<Transaction>>>) {
        let sink = Rc::new(RefCell::new(Vec::new()));
        let captured = Rc::clone(&sink);
        let form = TransactionForm::new(move |txn| captured.borrow_mut().push(txn));
        (form, sink)
    }

    fn fill(form: &mut TransactionForm, amount: &str, date: &str, category: Option<&str>) {
        form.amount_input.set_value(amount);
        form.date_input.set_value(date);
        if let Some(category) = category {
            assert!(form.select_category(category));
        }
    }

    #[test]
    fn test_valid_submission_emits_once() {
        let (mut form, sink) = form_with_sink();
        fill(&mut form, "5000", "2024-01-01", Some("Salary"));

        let id = form.submit().unwrap();

        let emitted = sink.borrow();
        assert_eq!(emitted.len(), 1);
        let txn = &emitted[0];
        assert_eq!(txn.id, id);
        assert_eq!(txn.amount, Money::from_units(5000));
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.category, "Salary");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(txn.notes, None);
    }

    #[test]
    fn test_fields_reset_after_submit() {
        let (mut form, _sink) = form_with_sink();
        form.set_type(TransactionType::Expense);
        fill(&mut form, "12.50", "2024-02-03", Some("Rent"));
        form.notes_input.set_value("February");

        form.submit().unwrap();

        assert_eq!(form.amount_input.value(), "");
        assert_eq!(form.date_input.value(), "");
        assert_eq!(form.category(), None);
        assert_eq!(form.notes_input.value(), "");
        assert_eq!(form.kind(), TransactionType::Expense);
    }

    #[test]
    fn test_missing_fields_do_not_emit() {
        let cases = [
            ("0", "2024-01-01", Some("Salary")),
            ("", "2024-01-01", Some("Salary")),
            ("abc", "2024-01-01", Some("Salary")),
            ("5000", "", Some("Salary")),
            ("5000", "2024-01-01", None),
        ];

        for (amount, date, category) in cases {
            let (mut form, sink) = form_with_sink();
            fill(&mut form, amount, date, category);

            let err = form.submit().unwrap_err();

            assert!(err.is_validation());
            assert_eq!(err.user_message(), REQUIRED_FIELDS_MESSAGE);
            assert!(sink.borrow().is_empty());
            // Nothing is reset on failure
            assert_eq!(form.amount_input.value(), amount);
            assert_eq!(form.date_input.value(), date);
            assert_eq!(form.category(), category);
        }
    }

    #[test]
    fn test_invalid_date_and_negative_amount() {
        let (mut form, sink) = form_with_sink();
        fill(&mut form, "10", "01/02/2024", Some("Business"));
        let err = form.submit().unwrap_err();
        assert_eq!(err.user_message(), "Invalid date format. Use YYYY-MM-DD");

        form.date_input.set_value("2024-01-02");
        form.amount_input.set_value("-10");
        let err = form.submit().unwrap_err();
        assert_eq!(err.user_message(), "Amount cannot be negative");
        assert!(sink.borrow().is_empty());
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let (mut form, sink) = form_with_sink();
        fill(&mut form, "90000000000000000", "2024-01-01", Some("Salary"));

        let err = form.submit().unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Amount cannot exceed 1000000000000.00");
        assert!(sink.borrow().is_empty());

        form.amount_input.set_value("1000000000000");
        form.submit().unwrap();
        assert_eq!(sink.borrow().len(), 1);
    }

    #[test]
    fn test_whitespace_notes_become_none() {
        let (mut form, sink) = form_with_sink();
        fill(&mut form, "5000", "2024-01-01", Some("Salary"));
        form.notes_input.set_value("   ");

        form.submit().unwrap();

        assert_eq!(sink.borrow()[0].notes, None);
    }

    #[test]
    fn test_type_change_clears_category() {
        let (mut form, _sink) = form_with_sink();
        assert!(form.select_category("Investment"));

        form.toggle_type();

        assert_eq!(form.kind(), TransactionType::Expense);
        assert_eq!(form.category(), None);
        assert!(!form.select_category("Salary"));
        assert!(form.select_category("Entertainment"));
    }

    #[test]
    fn test_category_cycling() {
        let (mut form, _sink) = form_with_sink();
        form.next_category();
        assert_eq!(form.category(), Some("Salary"));
        form.prev_category();
        assert_eq!(form.category(), None);
        form.prev_category();
        assert_eq!(form.category(), Some("Investment"));
        form.next_category();
        assert_eq!(form.category(), None);
    }

    #[test]
    fn test_field_navigation() {
        let (mut form, _sink) = form_with_sink();
        assert!(form.focused_input().is_none());
        form.next_field();
        assert_eq!(form.focused_field, FormField::Amount);
        assert!(form.amount_input.focused);
        form.prev_field();
        form.prev_field();
        assert_eq!(form.focused_field, FormField::Notes);
        assert!(form.notes_input.focused);
        assert!(!form.amount_input.focused);
    }
}
