use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use tracing::{debug, trace, warn};

/// Output target for the terminal UI.
///
/// By default the TUI renders to **stdout**. When stdout is piped, switch to
/// [`Stderr`](OutputTarget::Stderr) so the UI still reaches the terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout (default).
    #[default]
    Stdout,
    /// Write to stderr (useful when stdout is piped).
    Stderr,
}

/// Writer that wraps either stdout or stderr.
enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }
}

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, input, rendering, or teardown.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     alt_screen: false,
///     title: Some("basket".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Enable bracketed paste (default: true).
    pub bracketed_paste: bool,
    /// Initial terminal title.
    pub title: Option<String>,
    /// Restore the terminal before a panic message is printed (default: true).
    pub catch_panics: bool,
    /// Exit on SIGINT delivered outside raw mode (default: true).
    pub handle_signals: bool,
    /// Output target: stdout (default) or stderr.
    pub output: OutputTarget,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
            output: OutputTarget::default(),
        }
    }
}

/// The program runtime. Manages terminal setup, the event loop, and the
/// full [`Model`] lifecycle.
///
/// Every message, whether it came from a key press or from
/// [`Command::message`], is handled the same way: one call to
/// [`Model::update`], then one call to [`Model::view`]. Queued messages are
/// drained in FIFO order before the next terminal event is read.
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<MyApp>::with_options(flags, ProgramOptions::default())?
///         .run()
///         .await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Output>>,
    queue: VecDeque<M::Message>,
    options: ProgramOptions,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a program and put the terminal into raw mode.
    ///
    /// Returns an error if terminal initialization fails. The terminal is
    /// restored before the error is returned.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            queue: VecDeque::new(),
            options,
            should_quit: false,
        };
        debug!("program initialized");
        program.execute_command(init_cmd);
        Ok(program)
    }

    /// Run the program until the model quits. Returns the final model.
    ///
    /// The terminal is restored even when the loop fails.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;

        debug!("shutting down");
        let restored = restore_terminal(&self.options);
        result?;
        restored?;
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let mut events = EventStream::new();
        let handle_signals = self.options.handle_signals;

        loop {
            while let Some(msg) = self.queue.pop_front() {
                self.process_message(msg)?;
                if self.should_quit {
                    return Ok(());
                }
            }

            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    debug!("received ctrl+c signal");
                    return Ok(());
                }

                event = events.next() => match event {
                    Some(Ok(event)) => self.handle_event(event)?,
                    Some(Err(err)) => return Err(err.into()),
                    None => {
                        debug!("terminal input closed");
                        return Ok(());
                    }
                },
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_event(&mut self, event: crossterm::event::Event) -> Result<(), ProgramError> {
        let Some(event) = TerminalEvent::from_crossterm(event) else {
            return Ok(());
        };
        let resized = matches!(event, TerminalEvent::Resize(..));
        match self.model.on_event(event) {
            Some(msg) => self.process_message(msg),
            None if resized => self.render(),
            None => Ok(()),
        }
    }

    fn process_message(&mut self, msg: M::Message) -> Result<(), ProgramError> {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);
        self.render()
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.queue.push_back(msg),
            CommandInner::Quit => self.should_quit = true,
            CommandInner::SetTitle(title) => {
                let mut writer = Output::new(self.options.output);
                if let Err(err) = execute!(writer, SetTitle(&title)) {
                    warn!(%err, "failed to set terminal title");
                }
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        trace!("render");
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Output>>, ProgramError> {
    // Install the panic hook once; stacking hooks would restore repeatedly.
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        let output_target = options.output;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen, output_target);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    restore_on_error(setup_screen(options), || {
        restore_terminal_minimal(options.alt_screen, options.output)
    })
}

/// Run `restore` when `result` is an error. Raw mode is already on at that
/// point and must not outlive a failed setup.
fn restore_on_error<T>(
    result: Result<T, ProgramError>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T, ProgramError> {
    if let Err(err) = &result {
        warn!(%err, "terminal setup failed, restoring");
        if let Err(restore_err) = restore() {
            warn!(%restore_err, "failed to restore terminal");
        }
    }
    result
}

fn setup_screen(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Output>>, ProgramError> {
    let mut writer = Output::new(options.output);

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen, options.output)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool, output_target: OutputTarget) -> io::Result<()> {
    // Best effort: keep going after individual failures and report raw mode.
    let raw = disable_raw_mode();
    let mut writer = Output::new(output_target);
    execute!(writer, DisableBracketedPaste).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}
