//! Single-line text input used for adding, searching and renaming items.

use basket_core::command::Command;
use basket_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Style configuration for the text input.
#[derive(Debug, Clone)]
struct TextInputStyle {
    pub prompt: Style,
    pub text: Style,
    pub placeholder: Style,
    pub cursor: Style,
}

impl Default for TextInputStyle {
    fn default() -> Self {
        Self {
            prompt: Style::default().fg(Color::Cyan),
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Messages for the text input component.
///
/// `KeyPress` and `Paste` are inputs. `Changed`, `Submit` and `Cancel` are
/// outputs: the input returns them as commands and the parent intercepts
/// them before they come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Paste text at the cursor position. Line breaks are dropped.
    Paste(String),
    /// The value changed.
    Changed(String),
    /// Enter was pressed.
    Submit(String),
    /// Esc was pressed.
    Cancel,
}

/// A single-line text input component.
///
/// ```ignore
/// let mut input = TextInput::new("new item");
/// input.set_prompt("+ ");
/// input.focus();
/// // parent update:  Msg::Input(m) => self.input.update(m).map(Msg::Input)
/// // parent view:    self.input.view(frame, area)
/// ```
pub struct TextInput {
    value: Vec<char>,
    cursor: usize,
    focus: bool,
    placeholder: String,
    prompt: String,
    char_limit: Option<usize>,
    style: TextInputStyle,
}

impl TextInput {
    /// Create a new text input with the given placeholder text.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            focus: false,
            placeholder: placeholder.into(),
            prompt: String::new(),
            char_limit: None,
            style: TextInputStyle::default(),
        }
    }

    /// Set the maximum number of characters allowed.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    /// Replace the prompt.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Replace the placeholder.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn focus(&mut self) {
        self.focus = true;
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Get the current input value as a String.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Set the value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        if let Some(limit) = self.char_limit {
            self.value.truncate(limit);
        }
        self.cursor = self.value.len();
    }

    /// Clear the value and reset the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Cursor position as a character index.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value()))
    }

    fn room(&self) -> usize {
        match self.char_limit {
            Some(limit) => limit.saturating_sub(self.value.len()),
            None => usize::MAX,
        }
    }

    fn insert(&mut self, text: impl Iterator<Item = char>) -> Command<Message> {
        let chars: Vec<char> = text.filter(|c| !c.is_control()).take(self.room()).collect();
        if chars.is_empty() {
            return Command::none();
        }
        for c in chars {
            self.value.insert(self.cursor, c);
            self.cursor += 1;
        }
        self.changed()
    }

    fn delete_char_backward(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_char_forward(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_word_backward(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        let end = self.cursor;
        while self.cursor > 0 && self.value[self.cursor - 1] == ' ' {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.value[self.cursor - 1] != ' ' {
            self.cursor -= 1;
        }
        self.value.drain(self.cursor..end);
        self.changed()
    }

    fn delete_to_start(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.value.drain(..self.cursor);
        self.cursor = 0;
        self.changed()
    }

    fn delete_to_end(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.truncate(self.cursor);
        self.changed()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Enter => Command::message(Message::Submit(self.value())),
            KeyCode::Esc => Command::message(Message::Cancel),
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                Command::none()
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.value.len();
                Command::none()
            }
            KeyCode::Char('u') if ctrl => self.delete_to_start(),
            KeyCode::Char('k') if ctrl => self.delete_to_end(),
            KeyCode::Char('w') if ctrl => self.delete_word_backward(),
            KeyCode::Backspace if alt => self.delete_word_backward(),
            KeyCode::Char(_) if ctrl || alt => Command::none(),
            KeyCode::Char(c) => self.insert(std::iter::once(c)),
            KeyCode::Backspace => self.delete_char_backward(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Command::none()
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                Command::none()
            }
            KeyCode::Home => {
                self.cursor = 0;
                Command::none()
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                Command::none()
            }
            _ => Command::none(),
        }
    }
}

impl Component for TextInput {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if !self.focus {
            return Command::none();
        }
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::Paste(text) => self.insert(text.chars()),
            Message::Changed(_) | Message::Submit(_) | Message::Cancel => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if !self.prompt.is_empty() {
            spans.push(Span::styled(self.prompt.as_str(), self.style.prompt));
        }

        let available = (area.width as usize)
            .saturating_sub(self.prompt.width())
            .max(1);

        if self.value.is_empty() {
            if self.focus {
                spans.push(Span::styled(" ", self.style.cursor));
            }
            if !self.placeholder.is_empty() {
                spans.push(Span::styled(self.placeholder.as_str(), self.style.placeholder));
            }
        } else {
            // Scroll so the cursor cell stays on screen.
            let offset = (self.cursor + 1).saturating_sub(available);
            let end = (offset + available).min(self.value.len());
            let visible = &self.value[offset..end];

            if self.focus {
                let at = self.cursor - offset;
                let before: String = visible[..at.min(visible.len())].iter().collect();
                if !before.is_empty() {
                    spans.push(Span::styled(before, self.style.text));
                }
                match visible.get(at) {
                    Some(c) => {
                        spans.push(Span::styled(c.to_string(), self.style.cursor));
                        let after: String = visible[at + 1..].iter().collect();
                        if !after.is_empty() {
                            spans.push(Span::styled(after, self.style.text));
                        }
                    }
                    None => spans.push(Span::styled(" ", self.style.cursor)),
                }
            } else {
                spans.push(Span::styled(visible.iter().collect::<String>(), self.style.text));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
