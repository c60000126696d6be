use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

/// Single-line text field.
///
/// The cursor is a character index, so accented input such as "feijão"
/// edits correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBox {
    content: String,
    /// Character index
    cursor_position: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert pasted text, dropping line breaks.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor_position = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    /// Return the content and leave the field empty.
    pub fn take(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.content)
    }

    /// First visible character for a field `width` columns wide.
    fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 || self.cursor_position < width {
            0
        } else {
            self.cursor_position + 1 - width
        }
    }

    /// Render inside a bordered block titled `title`.
    ///
    /// With `masked` set every character is drawn as `•`.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        focused: bool,
        masked: bool,
    ) {
        let border_color = if focused { Color::Magenta } else { Color::DarkGray };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .render(area, buf);

        if area.width <= 2 || area.height <= 2 {
            return;
        }
        let inner_width = usize::from(area.width - 2);
        let (x, y) = (area.x + 1, area.y + 1);
        let offset = self.scroll_offset(inner_width);

        let text_style = Style::default().fg(Color::White);
        for (i, c) in self.content.chars().skip(offset).take(inner_width).enumerate() {
            let shown = if masked { '•' } else { c };
            buf.set_string(x + i as u16, y, shown.to_string(), text_style);
        }

        if focused {
            let cursor_x = self.cursor_position - offset;
            if cursor_x < inner_width {
                let under = match self.content.chars().nth(self.cursor_position) {
                    Some(_) if masked => '•',
                    Some(c) => c,
                    None => ' ',
                };
                buf.set_string(
                    x + cursor_x as u16,
                    y,
                    under.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Magenta),
                );
            }
        }
    }
}

/// Widget wrapper for [`InputBox`].
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
    masked: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
            masked: false,
        }
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused, self.masked);
    }
}
