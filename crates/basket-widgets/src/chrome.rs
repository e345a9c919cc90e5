//! Borders and overlay placement shared by basket's panels.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

/// Create a bordered block with focus-dependent border color.
///
/// Uses cyan when focused, dark gray when unfocused.
pub fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::new()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color))
}

/// Compute a centered sub-rect with fixed dimensions, clamped to `area`.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Clear `area`, draw the optional block, and return the inner area.
pub fn render_overlay(frame: &mut Frame, area: Rect, block: Option<&Block>) -> Rect {
    frame.render_widget(Clear, area);
    match block {
        Some(block) => {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        }
        None => area,
    }
}
