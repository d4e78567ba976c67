//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so non-ASCII names edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, with the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    /// Replace the content, with the cursor at the end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Build the spans for this input: label, text and a block cursor
    pub fn spans(&self, label_width: usize) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        if !self.label.is_empty() {
            let label_style = Style::default().fg(Color::Cyan);
            spans.push(Span::styled(
                format!("{:>width$}: ", self.label, width = label_width),
                label_style,
            ));
        }

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
            return spans;
        }

        let value_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        if !self.focused {
            spans.push(Span::styled(self.content.clone(), value_style));
            return spans;
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut after = self.content.chars().skip(self.cursor);
        let cursor_char = after.next().unwrap_or(' ');
        let rest: String = after.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !rest.is_empty() {
            spans.push(Span::styled(rest, value_style));
        }
        spans
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.spans(0));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Gifts".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Gifts");
        input.backspace();
        assert_eq!(input.value(), "Gift");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("₦50");
        assert_eq!(input.cursor, 3);
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "50");
        input.move_end();
        input.insert('é');
        assert_eq!(input.value(), "50é");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "5é");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().label("Name").content("Rent");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
        assert_eq!(input.label, "Name");
    }

    #[test]
    fn test_spans_show_placeholder_when_unfocused() {
        let input = TextInput::new().placeholder("YYYY-MM-DD");
        let spans = input.spans(0);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "YYYY-MM-DD");
    }
}
