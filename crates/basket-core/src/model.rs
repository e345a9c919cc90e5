use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal input is translated by [`on_event`](Model::on_event) into
///    messages.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`].
/// 5. `view` runs again after every processed message. There is no batching:
///    each frame reflects the state at the end of exactly one update.
///
/// `view` must be a pure function of `&self`. Anything it shows (filtered
/// rows, cursor position) is derived from state on every call rather than
/// cached between renders.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    fn view(&self, frame: &mut Frame);

    /// Translate a terminal event into a message, or `None` to drop it.
    ///
    /// Receives `&self` so that routing can depend on the current mode (for
    /// example, letters go to a text field while it is open). The default
    /// drops every event.
    fn on_event(&self, event: TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }
}
