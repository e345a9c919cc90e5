//! Terminal rendering of a filtered view.
//!
//! Everything here is a function of the rows it is handed. Nothing is cached
//! between frames: the app recomputes the view from the model on every
//! render and the whole list area is redrawn.

use basket_list::{Filter, ListModel, ViewRow};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, HighlightSpacing, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

/// Styles for list rows.
#[derive(Debug, Clone)]
pub struct RowStyle {
    pub normal: Style,
    pub checked: Style,
    pub index: Style,
    pub selected: Style,
    pub highlight_symbol: &'static str,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            checked: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            index: Style::default().fg(Color::DarkGray),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            highlight_symbol: "▸ ",
        }
    }
}

/// `[x] name  #index`, with the name struck through when checked.
pub fn row_line<'a>(row: &ViewRow<'a>, style: &RowStyle) -> Line<'a> {
    let (checkbox, name_style) = if row.checked() {
        ("[x] ", style.checked)
    } else {
        ("[ ] ", style.normal)
    };
    Line::from(vec![
        Span::raw(checkbox),
        Span::styled(row.name(), name_style),
        Span::styled(format!("  #{}", row.index), style.index),
    ])
}

/// Draw `rows` inside `block`, highlighting the row at view position
/// `selected`.
pub fn render_rows(
    frame: &mut Frame,
    area: Rect,
    rows: &[ViewRow<'_>],
    selected: Option<usize>,
    block: Block<'_>,
    style: &RowStyle,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, style)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(style.selected)
        .highlight_symbol(style.highlight_symbol)
        .highlight_spacing(HighlightSpacing::Always);
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Placeholder text for an empty view.
pub fn empty_message(list: &ListModel, search: &str) -> &'static str {
    let by_name = Filter::new(search, false);
    if list.is_empty() {
        "The list is empty. Press a to add an item."
    } else if !list.items().iter().any(|item| by_name.matches(item)) {
        "No items match the search."
    } else if list.hide_checked() {
        "Every matching item is checked and hidden. Press h to show them."
    } else {
        ""
    }
}

/// Draw [`empty_message`] inside `block`.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str, block: Block<'_>) {
    let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// One-line summary: counts plus the active filters.
pub fn summary_line<'a>(list: &ListModel, shown: usize, search: &'a str) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            "basket",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {shown} of {} shown, {} checked",
            list.len(),
            list.checked_count()
        )),
    ];
    if !search.is_empty() {
        spans.push(Span::styled("  search: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(search));
    }
    if list.hide_checked() {
        spans.push(Span::styled(
            "  hiding checked",
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_list::{compute_view, Item};

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn row_shows_checkbox_name_and_original_index() {
        let list = ListModel::seeded();
        let view = compute_view(&list, "mi");
        let line = row_line(&view[0], &RowStyle::default());
        assert_eq!(plain(&line), "[x] milk  #2");
        assert!(line.spans[1]
            .style
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn unchecked_row_is_not_struck_through() {
        let list = ListModel::seeded();
        let view = compute_view(&list, "");
        let line = row_line(&view[0], &RowStyle::default());
        assert_eq!(plain(&line), "[ ] apples  #0");
        assert!(!line.spans[1]
            .style
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn empty_messages() {
        assert!(empty_message(&ListModel::new(), "").starts_with("The list is empty"));
        let seeded = ListModel::seeded();
        assert!(empty_message(&seeded, "zzz").starts_with("No items match"));

        let only_checked = ListModel::from_items([Item::checked("milk")]).with_hide_checked(true);
        assert!(empty_message(&only_checked, "").starts_with("Every matching item"));
        assert!(empty_message(&only_checked, "mil").starts_with("Every matching item"));
    }

    #[test]
    fn summary_lists_filters() {
        let list = ListModel::seeded().with_hide_checked(true);
        let text = plain(&summary_line(&list, 3, "a"));
        assert_eq!(
            text,
            "basket  3 of 4 shown, 1 checked  search: a  hiding checked"
        );
    }
}
