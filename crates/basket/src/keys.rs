use basket_widgets::key::{Binding, KeyCombination, KeyMap};
use crossterm::event::KeyCode;

/// Key bindings for browsing the list.
#[derive(Debug, Clone)]
pub struct AppKeys {
    pub up: Binding,
    pub down: Binding,
    pub toggle: Binding,
    pub delete: Binding,
    pub rename: Binding,
    pub add: Binding,
    pub search: Binding,
    pub hide_checked: Binding,
    pub clear_search: Binding,
    pub help: Binding,
    pub quit: Binding,
    pub force_quit: Binding,
}

impl Default for AppKeys {
    fn default() -> Self {
        let key = |c| KeyCombination::new(KeyCode::Char(c));
        Self {
            up: Binding::with_keys(vec![KeyCombination::new(KeyCode::Up), key('k')], "up"),
            down: Binding::with_keys(vec![KeyCombination::new(KeyCode::Down), key('j')], "down"),
            toggle: Binding::with_keys(vec![key(' '), key('x')], "check"),
            delete: Binding::new(key('d'), "delete"),
            rename: Binding::new(key('e'), "rename"),
            add: Binding::new(key('a'), "add"),
            search: Binding::new(key('/'), "search"),
            hide_checked: Binding::new(key('h'), "hide checked"),
            clear_search: Binding::new(KeyCombination::new(KeyCode::Esc), "clear search"),
            help: Binding::new(key('?'), "help"),
            quit: Binding::new(key('q'), "quit"),
            force_quit: Binding::new(KeyCombination::ctrl(KeyCode::Char('c')), "quit"),
        }
    }
}

impl KeyMap for AppKeys {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.add,
            &self.toggle,
            &self.delete,
            &self.rename,
            &self.search,
            &self.hide_checked,
            &self.help,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<(&'static str, Vec<&Binding>)> {
        vec![
            ("Navigation", vec![&self.up, &self.down]),
            (
                "Items",
                vec![&self.add, &self.toggle, &self.delete, &self.rename],
            ),
            (
                "Filter",
                vec![&self.search, &self.clear_search, &self.hide_checked],
            ),
            ("General", vec![&self.help, &self.quit, &self.force_quit]),
        ]
    }
}

/// Key hints shown while a text field is open. The input widget handles
/// these keys itself; the bindings exist for the status line.
#[derive(Debug, Clone)]
pub struct EditKeys {
    pub confirm: Binding,
    pub cancel: Binding,
    pub force_quit: Binding,
}

impl Default for EditKeys {
    fn default() -> Self {
        Self {
            confirm: Binding::new(KeyCombination::new(KeyCode::Enter), "confirm"),
            cancel: Binding::new(KeyCombination::new(KeyCode::Esc), "cancel"),
            force_quit: Binding::new(KeyCombination::ctrl(KeyCode::Char('c')), "quit"),
        }
    }
}

impl KeyMap for EditKeys {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.confirm, &self.cancel, &self.force_quit]
    }

    fn full_help(&self) -> Vec<(&'static str, Vec<&Binding>)> {
        vec![("Editing", self.short_help())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn vim_and_arrow_keys_move() {
        let keys = AppKeys::default();
        assert!(keys.up.matches(&KeyEvent::from(KeyCode::Up)));
        assert!(keys.up.matches(&KeyEvent::from(KeyCode::Char('k'))));
        assert!(keys.down.matches(&KeyEvent::from(KeyCode::Char('j'))));
    }

    #[test]
    fn plain_c_is_not_quit() {
        let keys = AppKeys::default();
        assert!(!keys.force_quit.matches(&KeyEvent::from(KeyCode::Char('c'))));
        assert!(keys
            .force_quit
            .matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn every_short_binding_is_in_the_full_help() {
        let keys = AppKeys::default();
        let full: Vec<String> = keys
            .full_help()
            .into_iter()
            .flat_map(|(_, bindings)| bindings)
            .map(|b| b.description.clone())
            .collect();
        for b in keys.short_help() {
            assert!(full.contains(&b.description), "{} missing", b.description);
        }
    }
}
