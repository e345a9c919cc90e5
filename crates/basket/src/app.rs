//! The shopping-list application model.

use basket_core::{Command, Component, Model, TerminalEvent};
use basket_list::{compute_view, ListError, ListModel, ViewRow};
use basket_widgets::chrome::focus_block;
use basket_widgets::help::{self, Help};
use basket_widgets::text_input::{self, TextInput};
use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, trace};

use crate::config::AppConfig;
use crate::keys::{AppKeys, EditKeys};
use crate::render::{self, RowStyle};

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list and acting on the selected row.
    Browse,
    /// Typing the name of a new item.
    Adding,
    /// Typing search text; the view refilters on every change.
    Searching,
    /// Typing a new name for the item at `index` in the backing sequence.
    Renaming { index: usize },
}

impl Mode {
    pub fn is_editing(self) -> bool {
        !matches!(self, Mode::Browse)
    }
}

/// Feedback shown in the status line until the next action replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Messages for [`ShoppingApp`].
///
/// Item operations carry the original index of their target, resolved from
/// the selected view row when the key is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    MoveUp,
    MoveDown,
    Toggle(usize),
    Delete(usize),
    StartRename(usize),
    StartAdd,
    StartSearch,
    ToggleHideChecked,
    ClearSearch,
    Input(text_input::Message),
    Help(help::Message),
    Quit,
}

/// A shopping list with search, hide-checked and inline rename.
///
/// The app owns the [`ListModel`]. Search text, the cursor and the mode are UI
/// state kept next to it. The cursor is a position in the current view; it is
/// translated to an original index through [`ViewRow::index`] before any
/// operation reaches the model, and clamped after every update so it never
/// points past the end of a view that shrank.
pub struct ShoppingApp {
    list: ListModel,
    search: String,
    cursor: usize,
    mode: Mode,
    status: Option<Status>,
    input: TextInput,
    keys: AppKeys,
    help: Help,
    edit_help: Help,
    row_style: RowStyle,
}

impl ShoppingApp {
    pub fn list(&self) -> &ListModel {
        &self.list
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Position of the selection in the current view.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Current contents of the text field.
    pub fn input_value(&self) -> String {
        self.input.value()
    }

    pub fn help_visible(&self) -> bool {
        self.help.is_visible()
    }

    /// Rows visible for the current search and hide-checked flag.
    pub fn rows(&self) -> Vec<ViewRow<'_>> {
        compute_view(&self.list, &self.search)
    }

    /// Original index of the selected row, if the view has any rows.
    pub fn selected_index(&self) -> Option<usize> {
        self.rows().get(self.cursor).map(|row| row.index)
    }

    fn title_command(&self) -> Command<Msg> {
        Command::set_title(format!(
            "basket: {} items, {} checked",
            self.list.len(),
            self.list.checked_count()
        ))
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(from = ?self.mode, to = ?mode, "mode changed");
        self.mode = mode;
        let (prompt, placeholder) = match mode {
            Mode::Browse => {
                self.input.blur();
                self.input.reset();
                return;
            }
            Mode::Adding => ("+ ", "new item"),
            Mode::Searching => ("/ ", "search"),
            Mode::Renaming { .. } => ("> ", "new name"),
        };
        self.input.set_prompt(prompt);
        self.input.set_placeholder(placeholder);
        self.input.focus();
    }

    fn report(&mut self, err: ListError) -> Command<Msg> {
        self.status = Some(Status::Error(err.to_string()));
        Command::none()
    }

    /// Move the cursor onto the row for `index`, if it is visible.
    fn select_original(&mut self, index: usize) {
        let position = compute_view(&self.list, &self.search)
            .iter()
            .position(|row| row.index == index);
        if let Some(position) = position {
            self.cursor = position;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = compute_view(&self.list, &self.search).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn set_search(&mut self, search: String) {
        if search != self.search {
            debug!(search = %search, "search changed");
            self.search = search;
        }
    }

    fn submit(&mut self, value: String) -> Command<Msg> {
        match self.mode {
            Mode::Browse => Command::none(),
            Mode::Adding => match self.list.add_item(value) {
                Ok(index) => {
                    self.set_mode(Mode::Browse);
                    self.select_original(index);
                    self.status = self
                        .list
                        .get(index)
                        .map(|item| Status::Info(format!("Added {}", item.name)));
                    self.title_command()
                }
                Err(err) => self.report(err),
            },
            Mode::Searching => {
                self.set_search(value);
                self.set_mode(Mode::Browse);
                Command::none()
            }
            Mode::Renaming { index } => match self.list.rename_item(index, value) {
                Ok(old) => {
                    self.set_mode(Mode::Browse);
                    self.select_original(index);
                    self.status = self
                        .list
                        .get(index)
                        .map(|item| Status::Info(format!("Renamed {old} to {}", item.name)));
                    Command::none()
                }
                Err(err) => self.report(err),
            },
        }
    }

    fn cancel(&mut self) -> Command<Msg> {
        if self.mode == Mode::Searching {
            self.set_search(String::new());
        }
        self.set_mode(Mode::Browse);
        Command::none()
    }

    fn handle(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
                Command::none()
            }
            Msg::MoveDown => {
                self.cursor += 1;
                Command::none()
            }
            Msg::Toggle(index) => match self.list.toggle_checked(index) {
                Ok(_) => {
                    self.status = None;
                    self.title_command()
                }
                Err(err) => self.report(err),
            },
            Msg::Delete(index) => match self.list.remove_item(index) {
                Ok(item) => {
                    self.status = Some(Status::Info(format!("Deleted {}", item.name)));
                    self.title_command()
                }
                Err(err) => self.report(err),
            },
            Msg::StartRename(index) => match self.list.get(index) {
                Some(item) => {
                    let name = item.name.clone();
                    self.status = None;
                    self.set_mode(Mode::Renaming { index });
                    self.input.set_value(&name);
                    Command::none()
                }
                None => self.report(ListError::IndexOutOfRange {
                    index,
                    len: self.list.len(),
                }),
            },
            Msg::StartAdd => {
                self.status = None;
                self.set_mode(Mode::Adding);
                Command::none()
            }
            Msg::StartSearch => {
                self.status = None;
                self.set_mode(Mode::Searching);
                let search = self.search.clone();
                self.input.set_value(&search);
                Command::none()
            }
            Msg::ToggleHideChecked => {
                let hide = !self.list.hide_checked();
                self.list.set_hide_checked(hide);
                Command::none()
            }
            Msg::ClearSearch => {
                self.set_search(String::new());
                Command::none()
            }
            Msg::Input(text_input::Message::Submit(value)) => self.submit(value),
            Msg::Input(text_input::Message::Cancel) => self.cancel(),
            Msg::Input(text_input::Message::Changed(value)) => {
                if self.mode == Mode::Searching {
                    self.set_search(value);
                }
                Command::none()
            }
            Msg::Input(m) => self.input.update(m).map(Msg::Input),
            Msg::Help(m) => self.help.update(m).map(Msg::Help),
            Msg::Quit => Command::quit(),
        }
    }

    fn on_key(&self, key: KeyEvent) -> Option<Msg> {
        let keys = &self.keys;
        if keys.force_quit.matches(&key) {
            return Some(Msg::Quit);
        }
        if self.mode.is_editing() {
            return Some(Msg::Input(text_input::Message::KeyPress(key)));
        }
        if self.help.is_visible() {
            return Some(Msg::Help(help::Message::Hide));
        }

        if keys.up.matches(&key) {
            Some(Msg::MoveUp)
        } else if keys.down.matches(&key) {
            Some(Msg::MoveDown)
        } else if keys.toggle.matches(&key) {
            self.selected_index().map(Msg::Toggle)
        } else if keys.delete.matches(&key) {
            self.selected_index().map(Msg::Delete)
        } else if keys.rename.matches(&key) {
            self.selected_index().map(Msg::StartRename)
        } else if keys.add.matches(&key) {
            Some(Msg::StartAdd)
        } else if keys.search.matches(&key) {
            Some(Msg::StartSearch)
        } else if keys.hide_checked.matches(&key) {
            Some(Msg::ToggleHideChecked)
        } else if keys.clear_search.matches(&key) {
            (!self.search.is_empty()).then_some(Msg::ClearSearch)
        } else if keys.help.matches(&key) {
            Some(Msg::Help(help::Message::Toggle))
        } else if keys.quit.matches(&key) {
            Some(Msg::Quit)
        } else {
            None
        }
    }
}

impl Model for ShoppingApp {
    type Message = Msg;
    type Flags = AppConfig;

    fn init(config: AppConfig) -> (Self, Command<Msg>) {
        let keys = AppKeys::default();
        let help = Help::new(&keys);
        let edit_help = Help::new(&EditKeys::default());
        let app = ShoppingApp {
            list: config.initial_list(),
            search: config.search,
            cursor: 0,
            mode: Mode::Browse,
            status: None,
            input: TextInput::new(""),
            keys,
            help,
            edit_help,
            row_style: RowStyle::default(),
        };
        let title = app.title_command();
        (app, title)
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        let cmd = self.handle(msg);
        self.clamp_cursor();
        trace!(
            items = ?self.list.items(),
            hide_checked = self.list.hide_checked(),
            search = %self.search,
            mode = ?self.mode,
            cursor = self.cursor,
            "state after update"
        );
        cmd
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let input_height = if self.mode.is_editing() { 3 } else { 0 };
        let [header_area, list_area, input_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .areas(area);

        let rows = self.rows();
        frame.render_widget(
            Paragraph::new(render::summary_line(&self.list, rows.len(), &self.search)),
            header_area,
        );

        let block = focus_block(" Shopping list ", self.mode == Mode::Browse);
        if rows.is_empty() {
            let message = render::empty_message(&self.list, &self.search);
            render::render_empty(frame, list_area, message, block);
        } else {
            render::render_rows(
                frame,
                list_area,
                &rows,
                Some(self.cursor),
                block,
                &self.row_style,
            );
        }

        if self.mode.is_editing() {
            let title = match self.mode {
                Mode::Adding => " New item ".to_owned(),
                Mode::Searching => " Search ".to_owned(),
                Mode::Renaming { index } => format!(" Rename #{index} "),
                Mode::Browse => String::new(),
            };
            let block = focus_block(&title, true);
            let inner = block.inner(input_area);
            frame.render_widget(block, input_area);
            self.input.view(frame, inner);
        }

        let status = match &self.status {
            Some(Status::Error(text)) => {
                Line::from(Span::styled(text.as_str(), Style::default().fg(Color::Red)))
            }
            Some(Status::Info(text)) => {
                Line::from(Span::styled(text.as_str(), Style::default().fg(Color::Green)))
            }
            None if self.mode.is_editing() => self.edit_help.short_help_line(status_area.width),
            None => self.help.short_help_line(status_area.width),
        };
        frame.render_widget(Paragraph::new(status), status_area);

        self.help.view(frame, area);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => self.on_key(key),
            TerminalEvent::Paste(text) if self.mode.is_editing() => {
                Some(Msg::Input(text_input::Message::Paste(text)))
            }
            TerminalEvent::Paste(_) | TerminalEvent::Resize(..) => None,
        }
    }
}
