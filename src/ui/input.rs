/// Single line query editor. The cursor is a char index into `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

impl QueryInput {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text before the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert(&mut self, c: char) -> bool {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Deletes back to the start of the previous word, like a shell's Ctrl-W.
    pub fn delete_word(&mut self) -> bool {
        let chars: Vec<char> = self.text.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        if start == self.cursor {
            return false;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.text.replace_range(from..to, "");
        self.cursor = start;
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_cursor_at_end() {
        let input = QueryInput::new("héllo");
        assert_eq!(input.before_cursor(), "héllo");
    }

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut input = QueryInput::new("ac");
        input.left();
        assert!(input.insert('b'));
        assert_eq!(input.text(), "abc");
        assert_eq!(input.before_cursor(), "ab");
        assert!(input.backspace());
        assert_eq!(input.text(), "ac");
    }

    #[test]
    fn backspace_at_start_changes_nothing() {
        let mut input = QueryInput::new("abc");
        input.home();
        assert!(!input.backspace());
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = QueryInput::new("abc");
        input.home();
        assert!(input.delete());
        assert_eq!(input.text(), "bc");
        input.end();
        assert!(!input.delete());
    }

    #[test]
    fn delete_word_removes_previous_word_and_spaces() {
        let mut input = QueryInput::new("src main  ");
        assert!(input.delete_word());
        assert_eq!(input.text(), "src ");
        assert!(input.delete_word());
        assert_eq!(input.text(), "");
        assert!(!input.delete_word());
    }

    #[test]
    fn multibyte_editing() {
        let mut input = QueryInput::new("日本語");
        input.left();
        assert!(input.backspace());
        assert_eq!(input.text(), "日語");
        input.right();
        input.right();
        assert_eq!(input.before_cursor(), "日語");
    }

    #[test]
    fn clear_empties() {
        let mut input = QueryInput::new("abc");
        assert!(input.clear());
        assert!(!input.clear());
        assert_eq!(input.before_cursor(), "");
    }
}
