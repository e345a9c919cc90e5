use crossterm::event::{KeyEvent, KeyEventKind};

/// Terminal input delivered to [`Model::on_event`](crate::Model::on_event).
///
/// Only the events basket reacts to are represented. Key releases and repeats
/// reported by some terminals are dropped during conversion so that a single
/// key press produces a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a crossterm event, returning `None` for events basket ignores.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) if k.kind == KeyEventKind::Press => {
                Some(TerminalEvent::Key(k))
            }
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            crossterm::event::Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, KeyCode, KeyEventState, KeyModifiers};

    fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn key_press_is_kept() {
        let key = key_with_kind(KeyEventKind::Press);
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Key(key)),
            Some(TerminalEvent::Key(key))
        );
    }

    #[test]
    fn key_release_is_dropped() {
        let key = key_with_kind(KeyEventKind::Release);
        assert_eq!(TerminalEvent::from_crossterm(Event::Key(key)), None);
    }

    #[test]
    fn resize_and_paste_convert() {
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Resize(80, 24)),
            Some(TerminalEvent::Resize(80, 24))
        );
        assert_eq!(
            TerminalEvent::from_crossterm(Event::Paste("milk".into())),
            Some(TerminalEvent::Paste("milk".into()))
        );
    }

    #[test]
    fn focus_events_are_ignored() {
        assert_eq!(TerminalEvent::from_crossterm(Event::FocusGained), None);
    }
}
