//! Application state for the TUI
//!
//! The App is the page that owns the category map and the session's
//! transactions. Components read that state and report changes back
//! through callbacks; they never keep their own copies.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::settings::Settings;
use crate::models::{CategoryMap, Transaction};

use super::dialogs::transaction::{FormField, TransactionForm};
use super::views::categories::CategoryManager;
use super::widgets::{Notification, NotificationQueue};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Categories,
    Transactions,
}

impl ActiveView {
    pub const ALL: [ActiveView; 2] = [ActiveView::Categories, ActiveView::Transactions];

    pub fn title(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Transactions => "Transactions",
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Blocking message; all keys go to dismissing it while set
    pub alert: Option<String>,

    /// Category names by type
    pub categories: CategoryMap,

    /// Category manager state
    pub category_manager: CategoryManager,

    /// Transaction form state
    pub transaction_form: TransactionForm,

    /// Transactions recorded this session, appended by the form's callback
    transactions: Rc<RefCell<Vec<Transaction>>>,

    /// Selected row in the transactions view
    pub selected_transaction_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let transactions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&transactions);
        let transaction_form =
            TransactionForm::new(move |txn: Transaction| sink.borrow_mut().push(txn));

        Self {
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            alert: None,
            categories: CategoryMap::default(),
            category_manager: CategoryManager::new(),
            transaction_form,
            transactions,
            selected_transaction_index: 0,
            status_message: None,
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.input_mode = InputMode::Normal;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddTransaction {
            self.transaction_form.set_focus(FormField::Type);
            self.input_mode = InputMode::Editing;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Show a blocking alert
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Queue a toast notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Number of transactions recorded this session
    pub fn transaction_count(&self) -> usize {
        self.transactions.borrow().len()
    }

    /// Copy of the session's transactions, oldest first
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.borrow().clone()
    }

    /// Move selection up in the transactions view
    pub fn move_up(&mut self) {
        self.selected_transaction_index = self.selected_transaction_index.saturating_sub(1);
    }

    /// Move selection down in the transactions view
    pub fn move_down(&mut self) {
        if self.selected_transaction_index + 1 < self.transaction_count() {
            self.selected_transaction_index += 1;
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}
