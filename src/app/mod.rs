//! Application glue module
//!
//! Configuration, logging, and the input loop that ties the terminal, the
//! key decoder, the editor, and the renderer together.

mod config;

pub use config::{CliArgs, Config, ConfigError};

use std::fs::OpenOptions;
use std::io::{self, Stdin, Stdout, Write};
use std::sync::Mutex;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use crate::core::Document;
use crate::editor::{Command, Editor, Flow, Prompt, PromptState};
use crate::input::KeyReader;
use crate::renderer::{self, Renderer, BAR_ROWS};
use crate::storage::{self, StorageError};
use crate::terminal::{self, RawMode, TerminalError, WindowSize};

/// Shown in the message bar at startup
const HELP_MESSAGE: &str = "HELP: Ctrl-X = quit | Ctrl-S = save";

/// Top-level application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to set up logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Install a file-backed tracing subscriber if a log file is configured.
///
/// Stdout belongs to the editor screen, so nothing is logged without a file.
pub fn init_logging(config: &Config) -> Result<(), AppError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// The running editor bound to the process terminal
pub struct App {
    editor: Editor,
    renderer: Renderer,
    keys: KeyReader<Stdin>,
    out: Stdout,
    // Dropped last so the terminal is restored after the final write
    _raw: RawMode,
}

impl App {
    /// Load the document, enter raw mode, and size the editor to the terminal
    pub fn new(args: &CliArgs, config: &Config) -> Result<Self, AppError> {
        let document = match &args.file {
            Some(path) => storage::load(path)?,
            None => Document::new(),
        };

        let raw = RawMode::enable()?;

        let size = match (args.rows, args.cols) {
            (Some(rows), Some(cols)) => WindowSize::new(rows, cols),
            (rows, cols) => {
                let detected = terminal::window_size()?;
                WindowSize::new(rows.unwrap_or(detected.rows), cols.unwrap_or(detected.cols))
            },
        };
        tracing::debug!("Window size {}x{}", size.rows, size.cols);

        let text_rows = usize::from(size.rows).saturating_sub(BAR_ROWS);
        let mut editor = Editor::new(document, text_rows, usize::from(size.cols))
            .with_quit_times(config.quit_times);
        editor.set_status(HELP_MESSAGE);

        Ok(Self {
            editor,
            renderer: Renderer::new(config.message_timeout()),
            keys: KeyReader::new(io::stdin()),
            out: io::stdout(),
            _raw: raw,
        })
    }

    /// Run until the user quits. The screen is cleared on the way out, even on
    /// error.
    pub fn run(mut self) -> Result<(), AppError> {
        let result = self.event_loop();
        self.out.write_all(&renderer::clear_screen())?;
        self.out.flush()?;
        result
    }

    fn event_loop(&mut self) -> Result<(), AppError> {
        loop {
            self.refresh()?;
            let Some(key) = self.keys.read_key()? else {
                continue;
            };

            match self.editor.handle(Command::from(key)) {
                Flow::Continue => {},
                Flow::Quit => {
                    tracing::info!("Quit");
                    return Ok(());
                },
                Flow::PromptFilename => match self.prompt("Save as: ")? {
                    Some(name) => self.editor.save_as(name),
                    None => self.editor.abort_save(),
                },
            }
        }
    }

    /// Read a line of input in the message bar. `None` if cancelled.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        let mut prompt = Prompt::new(label);
        loop {
            self.editor.set_status(prompt.display());
            self.refresh()?;

            let Some(key) = self.keys.read_key()? else {
                continue;
            };
            match prompt.feed(key) {
                PromptState::Editing => {},
                PromptState::Accepted(answer) => {
                    self.editor.set_status("");
                    return Ok(Some(answer));
                },
                PromptState::Cancelled => {
                    self.editor.set_status("");
                    return Ok(None);
                },
            }
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        let frame = self.renderer.compose(&self.editor, Instant::now());
        self.out.write_all(&frame)?;
        self.out.flush()
    }
}
