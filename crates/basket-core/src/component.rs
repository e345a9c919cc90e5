use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the area to draw into, so a parent
/// decides where each child goes. Parents wrap the child's message type in
/// one of their own variants and lift returned commands with
/// [`Command::map`]:
///
/// ```rust,ignore
/// Msg::Input(m) => self.input.update(m).map(Msg::Input),
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`].
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must not draw outside it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
