//! Category manager view
//!
//! Lets the user add, rename and delete categories for one type at a time.
//! The manager never owns the category map: every operation reads the map
//! it is given and hands a replacement to the caller's setter.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::debug;

use crate::models::{CategoryMap, TransactionType};
use crate::tui::app::{App, InputMode};
use crate::tui::layout::CategoryLayout;
use crate::tui::widgets::TextInput;

/// Edit mode of the manager
#[derive(Debug, Clone, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        index: usize,
        draft: TextInput,
    },
}

impl EditState {
    /// Index of the row being edited
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Editing { index, .. } => Some(*index),
        }
    }
}

/// Transient state of the category manager
#[derive(Debug, Clone, Default)]
pub struct CategoryManager {
    active_type: TransactionType,
    pub new_category: TextInput,
    edit: EditState,
    pub selected_index: usize,
}

impl CategoryManager {
    pub fn new() -> Self {
        Self {
            new_category: TextInput::new().placeholder("New income category"),
            ..Self::default()
        }
    }

    pub fn active_type(&self) -> TransactionType {
        self.active_type
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditState::Editing { .. })
    }

    /// Mutable draft of the row being edited
    pub fn draft_mut(&mut self) -> Option<&mut TextInput> {
        match &mut self.edit {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Switch type; any edit in progress is dropped
    pub fn set_type(&mut self, kind: TransactionType) {
        self.active_type = kind;
        self.edit = EditState::Idle;
        self.selected_index = 0;
        self.new_category.placeholder = format!("New {} category", kind);
    }

    pub fn toggle_type(&mut self) {
        self.set_type(self.active_type.toggle());
    }

    /// Append the trimmed input to the active list and clear the input
    ///
    /// Blank input does nothing. Returns whether the setter was called.
    pub fn add(&mut self, categories: &CategoryMap, set: impl FnOnce(CategoryMap)) -> bool {
        let name = self.new_category.value().trim().to_string();
        if name.is_empty() {
            return false;
        }

        debug!(kind = %self.active_type, name = %name, "category added");
        set(categories.with_appended(self.active_type, name));
        self.new_category.clear();
        true
    }

    /// Remove the entry at `index` from the active list
    pub fn delete(
        &mut self,
        categories: &CategoryMap,
        index: usize,
        set: impl FnOnce(CategoryMap),
    ) -> bool {
        let Some(updated) = categories.with_removed(self.active_type, index) else {
            return false;
        };

        debug!(kind = %self.active_type, index, "category deleted");
        let remaining = updated.get(self.active_type).len();
        set(updated);
        self.selected_index = self.selected_index.min(remaining.saturating_sub(1));
        true
    }

    /// Start editing the entry at `index`, seeding the draft with its name
    pub fn begin_edit(&mut self, categories: &CategoryMap, index: usize) {
        if let Some(current) = categories.get(self.active_type).get(index) {
            self.edit = EditState::Editing {
                index,
                draft: TextInput::new().content(current.as_str()),
            };
        }
    }

    /// Save the draft over the edited entry
    ///
    /// A blank draft is ignored and the manager stays in edit mode; only
    /// cancel leaves it.
    pub fn save_edit(&mut self, categories: &CategoryMap, set: impl FnOnce(CategoryMap)) -> bool {
        let EditState::Editing { index, draft } = &self.edit else {
            return false;
        };
        let name = draft.value().trim();
        if name.is_empty() {
            return false;
        }
        let Some(updated) = categories.with_replaced(self.active_type, *index, name) else {
            return false;
        };

        debug!(kind = %self.active_type, index = *index, name, "category renamed");
        set(updated);
        self.edit = EditState::Idle;
        true
    }

    /// Drop the draft without touching the map
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, count: usize) {
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }
}

/// Render the category manager
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = CategoryLayout::new(area);
    let manager = &app.category_manager;

    render_toolbar(frame, app, layout.toolbar);

    let names = app.categories.get(manager.active_type());
    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(i, name)| match manager.edit_state() {
            EditState::Editing { index, draft } if *index == i => {
                let mut spans = draft.spans(0);
                spans.push(Span::styled(
                    "  [Enter] Save  [Esc] Cancel",
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(Line::from(spans))
            }
            _ => ListItem::new(Line::from(Span::styled(
                name.clone(),
                Style::default().fg(Color::White),
            ))),
        })
        .collect();

    let focused = app.input_mode == InputMode::Normal || manager.is_editing();
    let block = Block::default()
        .title(format!(" {} categories ({}) ", manager.active_type().label(), names.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    if items.is_empty() {
        let empty = Paragraph::new("No categories. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, layout.list);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(manager.selected_index.min(names.len() - 1)));
    frame.render_stateful_widget(list, layout.list, &mut state);
}

fn render_toolbar(frame: &mut Frame, app: &App, area: Rect) {
    let manager = &app.category_manager;
    let input_focused = app.input_mode == InputMode::Editing && !manager.is_editing();

    let block = Block::default()
        .title(" Manage Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if input_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut type_spans = vec![Span::styled("Type: ", Style::default().fg(Color::Cyan))];
    for kind in TransactionType::ALL {
        let style = if kind == manager.active_type() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        type_spans.push(Span::styled(format!(" {} ", kind.label()), style));
    }
    type_spans.push(Span::styled(
        "  t:Switch  a:Add  e:Edit  d:Delete",
        Style::default().fg(Color::DarkGray),
    ));

    let mut input = manager.new_category.clone();
    input.focused = input_focused;
    let mut input_spans = vec![Span::styled("New:  ", Style::default().fg(Color::Cyan))];
    input_spans.extend(input.spans(0));

    frame.render_widget(
        Paragraph::new(vec![Line::from(type_spans), Line::from(input_spans)]),
        inner,
    );
}

/// Handle keys in the category view
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if app.category_manager.is_editing() {
        return handle_edit_key(app, key);
    }
    if app.input_mode == InputMode::Editing {
        return handle_input_key(app, key);
    }

    let count = app.categories.get(app.category_manager.active_type()).len();
    match key.code {
        KeyCode::Char('t') => app.category_manager.toggle_type(),
        KeyCode::Char('j') | KeyCode::Down => app.category_manager.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.category_manager.move_up(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.input_mode = InputMode::Editing,
        KeyCode::Char('e') | KeyCode::Enter => {
            let index = app.category_manager.selected_index;
            app.category_manager.begin_edit(&app.categories, index);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let index = app.category_manager.selected_index;
            let current = app.categories.clone();
            let categories = &mut app.categories;
            if app
                .category_manager
                .delete(&current, index, |updated| *categories = updated)
            {
                app.set_status("Category deleted");
            }
        }
        _ => return false,
    }
    true
}

fn handle_input_key(app: &mut App, key: KeyEvent) -> bool {
    let input = &mut app.category_manager.new_category;
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => {
            let current = app.categories.clone();
            let categories = &mut app.categories;
            if app
                .category_manager
                .add(&current, |updated| *categories = updated)
            {
                app.set_status("Category added");
            }
        }
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

fn handle_edit_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.category_manager.cancel_edit(),
        KeyCode::Enter => {
            let current = app.categories.clone();
            let categories = &mut app.categories;
            if app
                .category_manager
                .save_edit(&current, |updated| *categories = updated)
            {
                app.set_status("Category renamed");
            }
        }
        _ => {
            let Some(draft) = app.category_manager.draft_mut() else {
                return false;
            };
            match key.code {
                KeyCode::Char(c) => draft.insert(c),
                KeyCode::Backspace => draft.backspace(),
                KeyCode::Delete => draft.delete(),
                KeyCode::Left => draft.move_left(),
                KeyCode::Right => draft.move_right(),
                KeyCode::Home => draft.move_start(),
                KeyCode::End => draft.move_end(),
                _ => return false,
            }
        }
    }
    true
}
