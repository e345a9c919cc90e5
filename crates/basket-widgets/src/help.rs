//! Keybinding help: a one-line status hint and a full overlay.

use basket_core::command::Command;
use basket_core::component::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::chrome::{centered_fixed, render_overlay};
use crate::key::KeyMap;

/// Messages for the help component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Toggle the overlay.
    Toggle,
    /// Hide the overlay.
    Hide,
}

/// A single entry displayed by [`Help`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpBinding {
    /// Key label, e.g. `ctrl+c`.
    pub keys: String,
    pub description: String,
}

/// Visual style configuration for [`Help`].
#[derive(Debug, Clone)]
struct HelpStyle {
    pub key: Style,
    pub description: Style,
    pub group: Style,
    pub border: Style,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Gray),
            group: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Keybinding help built from a [`KeyMap`].
///
/// The short line lists [`KeyMap::short_help`] and is truncated with an
/// ellipsis to the available width. The overlay lists every group from
/// [`KeyMap::full_help`] and is drawn on top of whatever is below it while
/// visible.
pub struct Help {
    short: Vec<HelpBinding>,
    groups: Vec<(String, Vec<HelpBinding>)>,
    visible: bool,
    style: HelpStyle,
    separator: String,
    ellipsis: String,
}

impl Help {
    /// Snapshot the bindings of `keymap`.
    pub fn new(keymap: &impl KeyMap) -> Self {
        let entry = |b: &&crate::key::Binding| HelpBinding {
            keys: b.keys_label(),
            description: b.description.clone(),
        };
        Self {
            short: keymap.short_help().iter().map(entry).collect(),
            groups: keymap
                .full_help()
                .into_iter()
                .map(|(title, bindings)| (title.to_owned(), bindings.iter().map(entry).collect()))
                .collect(),
            visible: false,
            style: HelpStyle::default(),
            separator: " \u{2022} ".to_string(), // " • "
            ellipsis: "\u{2026}".to_string(),   // "…"
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// One line of `key description` pairs, at most `max_width` columns wide.
    pub fn short_help_line(&self, max_width: u16) -> Line<'_> {
        let max = max_width as usize;
        let mut spans: Vec<Span> = Vec::new();
        let mut total = 0usize;

        for (idx, b) in self.short.iter().enumerate() {
            let sep = if idx > 0 { self.separator.width() } else { 0 };
            let entry = b.keys.width() + 1 + b.description.width();
            if total + sep + entry > max {
                spans.push(Span::raw(self.ellipsis.as_str()));
                break;
            }
            if idx > 0 {
                spans.push(Span::raw(self.separator.as_str()));
            }
            spans.push(Span::styled(b.keys.as_str(), self.style.key));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(b.description.as_str(), self.style.description));
            total += sep + entry;
        }
        Line::from(spans)
    }

    fn full_help_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for (idx, (title, bindings)) in self.groups.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(title.as_str(), self.style.group)));
            for b in bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<12}", b.keys), self.style.key),
                    Span::styled(b.description.as_str(), self.style.description),
                ]));
            }
        }
        lines
    }
}

impl Component for Help {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Toggle => self.visible = !self.visible,
            Message::Hide => self.visible = false,
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }
        let lines = self.full_help_lines();
        let height = (lines.len() as u16).saturating_add(2);
        let overlay = centered_fixed(44, height, area);
        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(self.style.border);
        let inner = render_overlay(frame, overlay, Some(&block));
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn focused(&self) -> bool {
        self.visible
    }
}
