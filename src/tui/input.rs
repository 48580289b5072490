//! Input field handling for the terminal user interface.

use ratatui::text::Span;

/// A single-line text input with a character-indexed cursor.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    /// Cursor position in characters, not bytes.
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text, cursor at the end.
    #[cfg(test)]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            active: false,
        }
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> u16 {
        let before = &self.value[..self.byte_index(self.cursor)];
        u16::try_from(Span::raw(before).width()).unwrap_or(u16::MAX)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = InputField::new();
        for c in "focus".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.value, "focus");
        field.handle_backspace();
        assert_eq!(field.value, "focu");
        assert_eq!(field.cursor, 4);
    }

    #[test]
    fn test_cursor_editing_mid_string() {
        let mut field = InputField::with_value("Tam sync");
        field.move_home();
        field.move_cursor_right();
        field.handle_char('e');
        assert_eq!(field.value, "Team sync");
        field.move_end();
        field.handle_delete();
        assert_eq!(field.value, "Team sync");
        field.move_home();
        field.handle_delete();
        assert_eq!(field.value, "eam sync");
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let mut field = InputField::with_value("日本 ok");
        assert_eq!(field.cursor, 5);
        assert_eq!(field.cursor_column(), 7);
        field.move_home();
        field.move_cursor_right();
        assert_eq!(field.cursor_column(), 2);
        field.move_home();
        assert_eq!(field.cursor_column(), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut field = InputField::with_value("café");
        assert_eq!(field.cursor, 4);
        field.handle_backspace();
        assert_eq!(field.value, "caf");
        field.handle_char('é');
        field.handle_char('!');
        assert_eq!(field.value, "café!");
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value, "caf!");
    }
}
