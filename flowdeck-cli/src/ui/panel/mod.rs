//! Main terminal panel for flowdeck.
//!
//! Owns the terminal (raw mode + alternate screen, restored on drop),
//! translates key events into [`PanelEvent`]s, and draws the current
//! [`PanelState`].
//!
//! # Module Structure
//!
//! - `state` - State structs and the parameter editor (no rendering
//!   dependencies)
//! - `render` - Layout orchestration

mod render;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use flowdeck::notify::Notification;

pub use state::{PanelEvent, PanelState, ParameterEditor, QUIT_CONFIRM_TIMEOUT};

/// Static panel configuration for the header line.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Node address shown in the header.
    pub node_address: String,
    /// Instance name for namespaced deployments.
    pub instance: Option<String>,
}

/// The panel UI.
pub struct Panel {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    config: PanelConfig,
    start_time: Instant,
    /// Quit confirmation state - Some(timestamp) when awaiting confirmation.
    quit_confirmation: Option<Instant>,
}

impl Panel {
    /// Create a new panel, entering raw mode and the alternate screen.
    pub fn new(config: PanelConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            config,
            start_time: Instant::now(),
            quit_confirmation: None,
        })
    }

    /// Restore terminal to normal state.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the panel from the current state and notifications.
    pub fn draw(&mut self, state: &PanelState, notifications: &[Notification]) -> io::Result<()> {
        let uptime = self.start_time.elapsed();
        let confirmation_remaining = self.confirmation_remaining();

        // Clone config for use in the draw closure
        let config = self.config.clone();

        self.terminal.draw(|frame| {
            render::render_ui(
                frame,
                state,
                &config,
                notifications,
                uptime,
                confirmation_remaining,
            );
        })?;

        Ok(())
    }

    /// Check for events (non-blocking).
    ///
    /// In edit mode all keys go to the parameter editor; Ctrl+S submits
    /// the buffer, Esc cancels. Outside edit mode, quit uses a
    /// confirmation flow to prevent accidental termination:
    /// - First 'q' press: enters confirmation mode (5 second timeout)
    /// - Second 'q' or 'y'/'Y': confirms quit
    /// - 'n'/'N' or Esc: cancels confirmation
    /// - Timeout: auto-cancels after 5 seconds
    pub fn poll_event(&mut self, state: &mut PanelState) -> io::Result<Option<PanelEvent>> {
        // Check for confirmation timeout (auto-cancel)
        if let Some(confirm_time) = self.quit_confirmation {
            if confirm_time.elapsed() > QUIT_CONFIRM_TIMEOUT {
                self.quit_confirmation = None;
            }
        }

        if !event::poll(Duration::from_millis(10))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        // Edit mode consumes every key
        if let Some(editor) = state.editor.as_mut() {
            match key.code {
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let raw = editor.buffer.clone();
                    state.editor = None;
                    return Ok(Some(PanelEvent::ParametersSubmitted(raw)));
                }
                KeyCode::Esc => state.editor = None,
                KeyCode::Enter => editor.insert_newline(),
                KeyCode::Backspace => editor.backspace(),
                KeyCode::Left => editor.move_left(),
                KeyCode::Right => editor.move_right(),
                KeyCode::Up => editor.move_up(),
                KeyCode::Down => editor.move_down(),
                KeyCode::Char(c) => editor.insert(c),
                _ => {}
            }
            return Ok(None);
        }

        if self.quit_confirmation.is_some() {
            // Currently awaiting confirmation
            match key.code {
                // Confirm quit
                KeyCode::Char('q')
                | KeyCode::Char('Q')
                | KeyCode::Char('y')
                | KeyCode::Char('Y') => {
                    return Ok(Some(PanelEvent::Quit));
                }
                // Cancel confirmation
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.quit_confirmation = None;
                }
                _ => {}
            }
            return Ok(None);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                // Enter confirmation mode instead of quitting immediately
                self.quit_confirmation = Some(Instant::now());
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                return Ok(Some(PanelEvent::StartRequested));
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                return Ok(Some(PanelEvent::StopRequested));
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                return Ok(Some(PanelEvent::RefreshRequested));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                state.editor = Some(ParameterEditor::new(&state.parameters_text));
            }
            _ => {}
        }

        Ok(None)
    }

    /// Returns the remaining time for confirmation timeout, if confirming.
    fn confirmation_remaining(&self) -> Option<Duration> {
        self.quit_confirmation
            .map(|t| QUIT_CONFIRM_TIMEOUT.saturating_sub(t.elapsed()))
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
