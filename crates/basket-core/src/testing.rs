use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the init/update/view cycle in a plain `#[test]`
/// function, no tokio runtime or TTY required. Messages produced through
/// [`Command::message`] are queued exactly as the runtime queues them and are
/// processed by [`drain_messages`](TestProgram::drain_messages);
/// [`event`](TestProgram::event) routes a terminal event through
/// [`Model::on_event`] and drains in one step, like a key press in a real
/// session. Each processed message is followed by one draw to an
/// [`DEFAULT_SIZE`] [`TestBackend`], matching the runtime's render order.
///
/// # Example
///
/// ```rust,ignore
/// use basket_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<App>::new(flags);
/// prog.event(TerminalEvent::Key(KeyEvent::from(KeyCode::Char(' '))));
/// assert!(prog.model().list().get(0).unwrap().checked);
///
/// let screen = prog.render_string(40, 10);
/// assert!(screen.contains("[x] apples"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit: bool,
    title: Option<String>,
    terminal: Terminal<TestBackend>,
    renders: usize,
}

/// Size of the backend [`TestProgram`] draws to after every message.
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Messages produced by `init` are queued; call
    /// [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let (width, height) = DEFAULT_SIZE;
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit: false,
            title: None,
            terminal,
            renders: 0,
        };
        program.collect(init_cmd);
        program.draw();
        program
    }

    /// Send a message, triggering a single update cycle followed by one
    /// render. Follow-up messages are queued, not processed.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
        self.draw();
    }

    /// Number of frames drawn so far: one for the initial state plus one per
    /// processed message, as in [`Program`](crate::Program).
    pub fn render_count(&self) -> usize {
        self.renders
    }

    fn draw(&mut self) {
        let model = &self.model;
        self.terminal
            .draw(|frame| model.view(frame))
            .expect("test backend never fails");
        self.renders += 1;
    }

    /// Route a terminal event through [`Model::on_event`], then process the
    /// resulting message and everything it queues.
    ///
    /// Returns `false` when the model dropped the event.
    pub fn event(&mut self, event: TerminalEvent) -> bool {
        match self.model.on_event(event) {
            Some(msg) => {
                self.send(msg);
                self.drain_messages();
                true
            }
            None => false,
        }
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Whether any processed command asked the program to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// The most recent title set through [`Command::set_title`].
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Rows are separated by newlines. Trailing whitespace within each row
    /// is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Quit => self.quit = true,
            CommandInner::SetTitle(title) => self.title = Some(title),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}
